use leptos::{either::Either, prelude::*, server_fn::codec::GetUrl};
use leptos_meta::Title;
use leptos_router::{components::*, hooks::*};

#[cfg(feature = "ssr")]
use crate::projects::{get_project, get_projects};
use crate::projects::{cache_lookup, Project, GLOBAL_PROJECT_CACHE};

#[server(input = GetUrl)]
pub async fn get_projects_server() -> Result<Vec<Project>, ServerFnError> {
    get_projects().map_err(|e| ServerFnError::new(e.to_string()))
}

#[server(input = GetUrl)]
pub async fn get_project_server(name: String) -> Result<Project, ServerFnError> {
    get_project(&name).map_err(|e| ServerFnError::new(e.to_string()))
}

#[component]
pub fn ProjectList() -> impl IntoView {
    let projects = Resource::new(
        || (),
        |_| async move {
            match get_projects_server().await {
                Ok(projects) => projects,
                Err(e) => {
                    log::warn!("Couldn't load projects: {e}");
                    Vec::new()
                }
            }
        },
    );

    view! {
        <Transition fallback=move || {
            view! {
                <div class="space-y-4">
                    <div class="loading-skeleton h-8 rounded"></div>
                    <div class="loading-skeleton h-8 rounded w-3/4"></div>
                </div>
            }
        }>
            {move || Suspend::new(async move {
                let projects = projects.await;
                view! {
                    <ul class="grid gap-4 md:grid-cols-2">
                        {projects
                            .into_iter()
                            .map(|project| {
                                view! {
                                    <li class="rounded-lg border border-white/10 bg-white/5 p-4 hover:bg-white/10 transition-colors duration-200">
                                        <A href=format!("/{}", project.slug())>
                                            <h3 class="present-heading-windows text-lg font-medium">
                                                {project.name}
                                            </h3>
                                            <p class="present-body text-sm mt-1 opacity-80">
                                                {project.description}
                                            </p>
                                        </A>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                }
            })}
        </Transition>
    }
}

#[component]
fn ProjectNotFound(name: String) -> impl IntoView {
    view! {
        <div class="mt-6" role="alert">
            <h1 class="present-heading-windows text-4xl font-bold">"Project not found"</h1>
            <p class="present-body text-base mt-4">
                "There is no project called " <code class="present-code">{name}</code> "."
            </p>
        </div>
    }
}

#[component]
pub fn ProjectPage() -> impl IntoView {
    let params = use_params_map();
    let project_name = move || params.get().get("project").unwrap_or_default().to_lowercase();
    let project = Resource::new(project_name, move |name| async move {
        let cache = &*GLOBAL_PROJECT_CACHE;
        if let Some(p) = cache.get(&name) {
            return Some((*p).clone());
        }
        let lookup = get_project_server(name.clone()).await;
        if let Err(e) = &lookup {
            log::warn!("Couldn't load project {name}: {e}");
        }
        cache_lookup(name, lookup)
    });

    view! {
        <Title text="Project" />
        <article class="max-w-3xl mx-auto p-8 text-white">
            <A href="/" attr:class="present-body text-sm opacity-80 hover:opacity-100">
                "← Back to all projects"
            </A>
            <Suspense>
                {move || Suspend::new(async move {
                    match project.await {
                        Some(p) => Either::Left(view! {
                            <Title text=p.name.clone() />
                            <h1 class="present-heading-windows text-4xl font-bold mt-6">{p.name}</h1>
                            <p class="present-body text-base mt-4 leading-relaxed">{p.description}</p>
                        }),
                        None => Either::Right(view! { <ProjectNotFound name=project_name() /> }),
                    }
                })}
            </Suspense>
        </article>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_names_the_project() {
        let html = view! { <ProjectNotFound name="ghost".to_string() /> }.to_html();
        assert!(html.contains("Project not found"));
        assert!(html.contains("ghost"));
    }
}
