use shared::{NumericInput, TransactionRequest, TRANSACTION_EXPENSE, TRANSACTION_INCOME};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::PageProps;
use crate::components::fields::{bind_input, bind_select, optional};
use crate::components::{FormMessage, LoadingState};
use crate::hooks::use_resource;
use crate::services::format::{display_date, format_currency, today, transaction_label};

#[function_component(FinancesPage)]
pub fn finances_page(props: &PageProps) -> Html {
    let tipo_transaccion = use_state(|| TRANSACTION_EXPENSE.to_string());
    let descripcion = use_state(String::new);
    let monto = use_state(String::new);
    let fecha = use_state(today);
    let categoria = use_state(String::new);
    let saving = use_state(|| false);
    let form_error = use_state(|| None::<String>);

    let transactions = {
        let api = props.api.clone();
        use_resource(move || {
            let api = api.clone();
            async move { api.list_transactions().await }
        })
    };

    let on_submit = {
        let api = props.api.clone();
        let reload = transactions.reload.clone();
        let tipo_transaccion = tipo_transaccion.clone();
        let descripcion = descripcion.clone();
        let monto = monto.clone();
        let fecha = fecha.clone();
        let categoria = categoria.clone();
        let saving = saving.clone();
        let form_error = form_error.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let request = TransactionRequest {
                tipo_transaccion: optional(&tipo_transaccion),
                descripcion: optional(&descripcion),
                monto: optional(&monto).map(NumericInput::Text),
                fecha: optional(&fecha),
                categoria: optional(&categoria),
            };
            let api = api.clone();
            let reload = reload.clone();
            let descripcion = descripcion.clone();
            let monto = monto.clone();
            let categoria = categoria.clone();
            let saving = saving.clone();
            let form_error = form_error.clone();

            spawn_local(async move {
                saving.set(true);
                match api.create_transaction(&request).await {
                    Ok(_) => {
                        form_error.set(None);
                        descripcion.set(String::new());
                        monto.set(String::new());
                        categoria.set(String::new());
                        reload.emit(());
                    }
                    Err(e) => form_error.set(Some(e)),
                }
                saving.set(false);
            });
        })
    };

    let on_delete = {
        let api = props.api.clone();
        let reload = transactions.reload.clone();
        Callback::from(move |id: i64| {
            if !gloo::dialogs::confirm("¿Estás seguro de que quieres eliminar esta transacción?") {
                return;
            }
            let api = api.clone();
            let reload = reload.clone();
            spawn_local(async move {
                match api.delete_transaction(id).await {
                    Ok(()) => reload.emit(()),
                    Err(e) => gloo::dialogs::alert(&e),
                }
            });
        })
    };

    let rows = (*transactions.data).clone().unwrap_or_default();

    html! {
        <main class="page">
            <h1>{"Control Financiero"}</h1>

            <section class="card">
                <h2>{"Nueva Transacción"}</h2>
                <FormMessage message={(*form_error).clone()} />
                <form class="inline-form" onsubmit={on_submit}>
                    <div class="form-row">
                        <select onchange={bind_select(&tipo_transaccion)}>
                            {for [TRANSACTION_EXPENSE, TRANSACTION_INCOME].into_iter().map(|value| html! {
                                <option value={value} selected={*tipo_transaccion == value}>{transaction_label(value)}</option>
                            })}
                        </select>
                        <input type="text" placeholder="Descripción" value={(*descripcion).clone()} onchange={bind_input(&descripcion)} />
                        <input type="number" step="0.01" placeholder="Monto" value={(*monto).clone()} onchange={bind_input(&monto)} />
                        <input type="date" value={(*fecha).clone()} onchange={bind_input(&fecha)} />
                        <input type="text" placeholder="Categoría" value={(*categoria).clone()} onchange={bind_input(&categoria)} />
                        <button type="submit" class="btn btn-primary" disabled={*saving}>{"Agregar"}</button>
                    </div>
                </form>
            </section>

            <section class="card">
                <h2>{"Historial"}</h2>
                <LoadingState loading={*transactions.loading} error={(*transactions.error).clone()} label="transacciones">
                    <table class="data-table">
                        <thead>
                            <tr>
                                <th>{"Fecha"}</th>
                                <th>{"Tipo"}</th>
                                <th>{"Descripción"}</th>
                                <th>{"Categoría"}</th>
                                <th>{"Monto"}</th>
                                <th></th>
                            </tr>
                        </thead>
                        <tbody>
                            {for rows.iter().map(|t| {
                                let id = t.id;
                                let on_delete = on_delete.clone();
                                let amount_class = if t.tipo_transaccion == TRANSACTION_INCOME { "amount positive" } else { "amount negative" };
                                html! {
                                    <tr key={id}>
                                        <td>{display_date(Some(t.fecha.as_str()))}</td>
                                        <td>{transaction_label(&t.tipo_transaccion)}</td>
                                        <td>{&t.descripcion}</td>
                                        <td>{t.categoria.clone().unwrap_or_default()}</td>
                                        <td class={amount_class}>{format_currency(t.monto)}</td>
                                        <td>
                                            <button class="btn btn-danger btn-small" onclick={Callback::from(move |_: MouseEvent| on_delete.emit(id))}>
                                                {"Eliminar"}
                                            </button>
                                        </td>
                                    </tr>
                                }
                            })}
                        </tbody>
                    </table>
                </LoadingState>
            </section>
        </main>
    }
}
