use yew::prelude::*;

use crate::navigation::Page;

#[derive(Properties, PartialEq)]
pub struct SidebarProps {
    pub current: Page,
    pub on_navigate: Callback<Page>,
}

#[function_component(Sidebar)]
pub fn sidebar(props: &SidebarProps) -> Html {
    let entries = [
        (Page::Dashboard, "Dashboard"),
        (Page::Animals, "Gestión de Animales"),
        (Page::Finances, "Control Financiero"),
        (Page::Production, "Producción Lechera"),
    ];

    html! {
        <aside class="sidebar">
            <h2>{"FincaPiza"}</h2>
            <nav>
                <ul>
                    {for entries.into_iter().map(|(page, label)| {
                        let active = props.current.section() == page;
                        let on_click = {
                            let on_navigate = props.on_navigate.clone();
                            let page = page.clone();
                            Callback::from(move |_: MouseEvent| on_navigate.emit(page.clone()))
                        };
                        html! {
                            <li>
                                <button class={classes!("nav-link", active.then_some("active"))} onclick={on_click}>
                                    {label}
                                </button>
                            </li>
                        }
                    })}
                </ul>
            </nav>
        </aside>
    }
}
