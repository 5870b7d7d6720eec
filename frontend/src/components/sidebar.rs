use yew::prelude::*;

use crate::app::Page;

#[derive(Properties, PartialEq)]
pub struct SidebarProps {
    pub current: Page,
    pub on_navigate: Callback<Page>,
    pub on_logout: Callback<()>,
    #[prop_or_default]
    pub profile_image: Option<String>,
}

#[function_component(Sidebar)]
pub fn sidebar(props: &SidebarProps) -> Html {
    let on_logout = props.on_logout.reform(|_: MouseEvent| ());

    html! {
        <nav class="sidebar">
            <div class="sidebar-brand">
                {if let Some(url) = props.profile_image.clone() {
                    html! { <img class="sidebar-avatar" src={url} alt="Profile" /> }
                } else {
                    html! { <div class="sidebar-avatar sidebar-avatar-empty">{"👤"}</div> }
                }}
                <span class="sidebar-title">{"Inventory"}</span>
            </div>
            <ul class="sidebar-links">
                {for Page::NAVIGATION.into_iter().map(|page| {
                    let onclick = props.on_navigate.reform(move |_: MouseEvent| page);
                    html! {
                        <li>
                            <button
                                type="button"
                                class={classes!("sidebar-link", (page == props.current).then_some("active"))}
                                {onclick}
                            >
                                {page.title()}
                            </button>
                        </li>
                    }
                })}
            </ul>
            <button type="button" class="sidebar-logout" onclick={on_logout}>{"Logout"}</button>
        </nav>
    }
}
