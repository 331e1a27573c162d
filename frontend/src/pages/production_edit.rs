use shared::{MilkProductionRequest, NumericInput};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::{navigate_to, RecordPageProps};
use crate::components::fields::{bind_input, optional};
use crate::components::FormMessage;
use crate::navigation::Page;
use crate::services::format::date_input_value;

#[function_component(ProductionEditPage)]
pub fn production_edit_page(props: &RecordPageProps) -> Html {
    let record_id = props.id;
    let fecha = use_state(String::new);
    let litros = use_state(String::new);
    let precio = use_state(String::new);
    let gastos = use_state(String::new);
    let loading = use_state(|| true);
    let form_error = use_state(|| None::<String>);

    {
        let api = props.api.clone();
        let fecha = fecha.clone();
        let litros = litros.clone();
        let precio = precio.clone();
        let gastos = gastos.clone();
        let loading = loading.clone();
        let form_error = form_error.clone();

        use_effect_with(record_id, move |id| {
            let id = *id;
            spawn_local(async move {
                match api.get_production(id).await {
                    Ok(record) => {
                        fecha.set(date_input_value(Some(record.fecha.as_str())));
                        litros.set(record.litros_producidos.to_string());
                        precio.set(record.precio_litro.to_string());
                        gastos.set(record.gastos_asociados.to_string());
                    }
                    Err(e) => form_error.set(Some(e)),
                }
                loading.set(false);
            });
            || ()
        });
    }

    let on_submit = {
        let api = props.api.clone();
        let on_navigate = props.on_navigate.clone();
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
            let on_navigate = on_navigate.clone();
            let form_error = form_error.clone();

            spawn_local(async move {
                match api.update_production(record_id, &request).await {
                    Ok(_) => on_navigate.emit(Page::Production),
                    Err(e) => form_error.set(Some(e)),
                }
            });
        })
    };

    if *loading {
        return html! { <p class="loading">{"Cargando registro..."}</p> };
    }

    html! {
        <main class="page">
            <h1>{"Editar Registro de Producción"}</h1>
            <FormMessage message={(*form_error).clone()} />

            <form class="record-form" onsubmit={on_submit}>
                <div class="form-group">
                    <label for="fecha">{"Fecha"}</label>
                    <input type="date" id="fecha" value={(*fecha).clone()} onchange={bind_input(&fecha)} />
                </div>
                <div class="form-group">
                    <label for="litros">{"Litros Producidos"}</label>
                    <input type="number" id="litros" step="0.01" value={(*litros).clone()} onchange={bind_input(&litros)} />
                </div>
                <div class="form-group">
                    <label for="precio">{"Precio por Litro"}</label>
                    <input type="number" id="precio" step="0.01" value={(*precio).clone()} onchange={bind_input(&precio)} />
                </div>
                <div class="form-group">
                    <label for="gastos">{"Gastos Asociados"}</label>
                    <input type="number" id="gastos" step="0.01" value={(*gastos).clone()} onchange={bind_input(&gastos)} />
                </div>
                <div class="form-actions">
                    <button type="submit" class="btn btn-primary">{"Guardar Cambios"}</button>
                    <button type="button" class="btn" onclick={navigate_to(&props.on_navigate, Page::Production)}>
                        {"Cancelar"}
                    </button>
                </div>
            </form>
        </main>
    }
}
