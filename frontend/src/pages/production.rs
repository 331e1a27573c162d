use shared::{MilkProductionRequest, NumericInput};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::{navigate_to, PageProps};
use crate::components::fields::{bind_input, optional};
use crate::components::{FormMessage, LoadingState};
use crate::hooks::use_resource;
use crate::navigation::Page;
use crate::services::format::{display_date, format_currency, format_liters, today};

#[function_component(ProductionPage)]
pub fn production_page(props: &PageProps) -> Html {
    let fecha = use_state(today);
    let litros = use_state(String::new);
    let precio = use_state(String::new);
    let gastos = use_state(String::new);
    let form_error = use_state(|| None::<String>);

    let records = {
        let api = props.api.clone();
        use_resource(move || {
            let api = api.clone();
            async move { api.list_production().await }
        })
    };

    let on_submit = {
        let api = props.api.clone();
        let reload = records.reload.clone();
        let fecha = fecha.clone();
        let litros = litros.clone();
        let precio = precio.clone();
        let gastos = gastos.clone();
        let form_error = form_error.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let request = MilkProductionRequest {
                fecha: optional(&fecha),
                litros_producidos: optional(&litros).map(NumericInput::Text),
                precio_litro: optional(&precio).map(NumericInput::Text),
                gastos_asociados: optional(&gastos).map(NumericInput::Text),
            };
            let api = api.clone();
            let reload = reload.clone();
            let litros = litros.clone();
            let gastos = gastos.clone();
            let form_error = form_error.clone();

            spawn_local(async move {
                match api.create_production(&request).await {
                    Ok(_) => {
                        form_error.set(None);
                        litros.set(String::new());
                        gastos.set(String::new());
                        reload.emit(());
                    }
                    Err(e) => form_error.set(Some(e)),
                }
            });
        })
    };

    let on_delete = {
        let api = props.api.clone();
        let reload = records.reload.clone();
        Callback::from(move |id: i64| {
            if !gloo::dialogs::confirm("¿Estás seguro de que quieres eliminar este registro?") {
                return;
            }
            let api = api.clone();
            let reload = reload.clone();
            spawn_local(async move {
                match api.delete_production(id).await {
                    Ok(()) => reload.emit(()),
                    Err(e) => gloo::dialogs::alert(&e),
                }
            });
        })
    };

    let rows = (*records.data).clone().unwrap_or_default();

    html! {
        <main class="page">
            <h1>{"Producción Lechera"}</h1>

            <section class="card">
                <h2>{"Nuevo Registro de Producción"}</h2>
                <FormMessage message={(*form_error).clone()} />
                <form class="inline-form" onsubmit={on_submit}>
                    <div class="form-row">
                        <div class="form-group">
                            <label>{"Fecha"}</label>
                            <input type="date" value={(*fecha).clone()} onchange={bind_input(&fecha)} />
                        </div>
                        <div class="form-group">
                            <label>{"Litros Producidos"}</label>
                            <input type="number" step="0.01" placeholder="Ej: 150.5" value={(*litros).clone()} onchange={bind_input(&litros)} />
                        </div>
                        <div class="form-group">
                            <label>{"Precio por Litro"}</label>
                            <input type="number" step="0.01" placeholder="Ej: 2000" value={(*precio).clone()} onchange={bind_input(&precio)} />
                        </div>
                        <div class="form-group">
                            <label>{"Gastos Asociados"}</label>
                            <input type="number" step="0.01" placeholder="0" value={(*gastos).clone()} onchange={bind_input(&gastos)} />
                        </div>
                        <button type="submit" class="btn btn-primary">{"Guardar"}</button>
                    </div>
                </form>
            </section>

            <section class="card">
                <h2>{"Historial de Producción"}</h2>
                <LoadingState loading={*records.loading} error={(*records.error).clone()} label="producción">
                    <table class="data-table">
                        <thead>
                            <tr>
                                <th>{"Fecha"}</th>
                                <th>{"Litros"}</th>
                                <th>{"Precio/Litro"}</th>
                                <th>{"Gastos"}</th>
                                <th>{"Ingreso Total"}</th>
                                <th></th>
                            </tr>
                        </thead>
                        <tbody>
                            {for rows.iter().map(|record| {
                                let id = record.id;
                                let on_delete = on_delete.clone();
                                html! {
                                    <tr key={id}>
                                        <td>{display_date(Some(record.fecha.as_str()))}</td>
                                        <td>{format_liters(record.litros_producidos)}</td>
                                        <td>{format_currency(record.precio_litro)}</td>
                                        <td>{format_currency(record.gastos_asociados)}</td>
                                        <td>{format_currency(record.ingreso_total)}</td>
                                        <td>
                                            <button class="btn btn-link" onclick={navigate_to(&props.on_navigate, Page::EditProduction(id))}>
                                                {"Editar"}
                                            </button>
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
