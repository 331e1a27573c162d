use yew::prelude::*;

use super::PageProps;
use crate::components::{LoadingState, StatCard};
use crate::hooks::use_resource;
use crate::services::format::format_currency;

#[function_component(DashboardPage)]
pub fn dashboard_page(props: &PageProps) -> Html {
    let summary = {
        let api = props.api.clone();
        use_resource(move || {
            let api = api.clone();
            async move { api.get_summary().await }
        })
    };

    let cards = match (*summary.data).as_ref() {
        Some(summary) => {
            let balance_class = if summary.finanzas.balance >= 0.0 { "positive" } else { "negative" };
            html! {
                <div class="stat-grid">
                    <StatCard title="Total Animales Activos" value={summary.animales.total.to_string()} />
                    <StatCard title="Total Bovinos" value={summary.animales.bovinos.to_string()} />
                    <StatCard title="Total Equinos" value={summary.animales.equinos.to_string()} />
                    <StatCard
                        title="Balance General"
                        value={format_currency(summary.finanzas.balance)}
                        class={classes!(balance_class)}
                    />
                    <StatCard title="Ingresos Totales" value={format_currency(summary.finanzas.ingresos)} class={classes!("positive")} />
                    <StatCard title="Gastos Totales" value={format_currency(summary.finanzas.gastos)} class={classes!("negative")} />
                </div>
            }
        }
        None => html! {},
    };

    html! {
        <main class="page">
            <h1>{"Dashboard"}</h1>
            <LoadingState loading={*summary.loading} error={(*summary.error).clone()} label="dashboard">
                {cards}
            </LoadingState>
        </main>
    }
}
