//! One component per page. Every page fetches on mount, renders a list or a
//! form, and refetches after each mutation.

pub mod animal_detail;
pub mod animal_form;
pub mod animal_list;
pub mod dashboard;
pub mod finances;
pub mod production;
pub mod production_edit;

pub use animal_detail::AnimalDetailPage;
pub use animal_form::AnimalFormPage;
pub use animal_list::AnimalListPage;
pub use dashboard::DashboardPage;
pub use finances::FinancesPage;
pub use production::ProductionPage;
pub use production_edit::ProductionEditPage;

use yew::prelude::*;

use crate::navigation::Page;
use crate::services::api::ApiClient;

/// Props shared by pages without an id
#[derive(Properties, PartialEq)]
pub struct PageProps {
    pub api: ApiClient,
    pub on_navigate: Callback<Page>,
}

/// Props for pages bound to one record
#[derive(Properties, PartialEq)]
pub struct RecordPageProps {
    pub api: ApiClient,
    pub on_navigate: Callback<Page>,
    pub id: i64,
}

pub(crate) fn navigate_to(on_navigate: &Callback<Page>, page: Page) -> Callback<MouseEvent> {
    let on_navigate = on_navigate.clone();
    Callback::from(move |_: MouseEvent| on_navigate.emit(page.clone()))
}
