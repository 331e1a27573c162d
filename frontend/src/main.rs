mod components;
mod hooks;
mod navigation;
mod pages;
mod services;

use yew::prelude::*;

use components::Sidebar;
use navigation::Page;
use pages::{
    AnimalDetailPage, AnimalFormPage, AnimalListPage, DashboardPage, FinancesPage, ProductionEditPage,
    ProductionPage,
};
use services::api::ApiClient;

#[function_component(App)]
fn app() -> Html {
    let api = use_memo((), |_| ApiClient::new());
    let page = use_state(|| Page::Dashboard);

    let on_navigate = {
        let page = page.clone();
        Callback::from(move |next: Page| {
            gloo::console::log!("Navigating to", format!("{:?}", next));
            page.set(next);
        })
    };

    let api = (*api).clone();
    let key = page.key();
    let content = match (*page).clone() {
        Page::Dashboard => html! { <DashboardPage key={key} {api} on_navigate={on_navigate.clone()} /> },
        Page::Animals => html! { <AnimalListPage key={key} {api} on_navigate={on_navigate.clone()} /> },
        Page::NewAnimal => html! { <AnimalFormPage key={key} {api} on_navigate={on_navigate.clone()} /> },
        Page::AnimalDetail(id) => html! { <AnimalDetailPage key={key} {api} on_navigate={on_navigate.clone()} {id} /> },
        Page::EditAnimal(id) => html! { <AnimalFormPage key={key} {api} on_navigate={on_navigate.clone()} animal_id={Some(id)} /> },
        Page::Finances => html! { <FinancesPage key={key} {api} on_navigate={on_navigate.clone()} /> },
        Page::Production => html! { <ProductionPage key={key} {api} on_navigate={on_navigate.clone()} /> },
        Page::EditProduction(id) => html! { <ProductionEditPage key={key} {api} on_navigate={on_navigate.clone()} {id} /> },
    };

    html! {
        <div class="layout">
            <Sidebar current={(*page).clone()} on_navigate={on_navigate.clone()} />
            {content}
        </div>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
