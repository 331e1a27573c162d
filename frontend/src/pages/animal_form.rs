use shared::{AnimalRequest, NumericInput, STATUS_ACTIVE, STATUS_DECEASED, STATUS_SOLD};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::components::fields::{bind_input, bind_select, optional};
use crate::components::FormMessage;
use crate::hooks::use_resource;
use crate::navigation::Page;
use crate::services::api::ApiClient;
use crate::services::format::{date_input_value, status_label};

#[derive(Properties, PartialEq)]
pub struct AnimalFormPageProps {
    pub api: ApiClient,
    pub on_navigate: Callback<Page>,
    /// `None` registers a new animal, `Some` edits an existing one
    #[prop_or_default]
    pub animal_id: Option<i64>,
}

/// Register or edit an animal. Saving navigates to its detail page.
#[function_component(AnimalFormPage)]
pub fn animal_form_page(props: &AnimalFormPageProps) -> Html {
    let numero_etiqueta = use_state(String::new);
    let nombre = use_state(String::new);
    let especie_id = use_state(String::new);
    let fecha_nacimiento = use_state(String::new);
    let estado = use_state(|| STATUS_ACTIVE.to_string());
    let fecha_compra = use_state(String::new);
    let precio_compra = use_state(String::new);
    let saving = use_state(|| false);
    let form_error = use_state(|| None::<String>);

    let species = {
        let api = props.api.clone();
        use_resource(move || {
            let api = api.clone();
            async move { api.list_species().await }
        })
    };

    // Preselect the first species for new animals
    {
        let especie_id = especie_id.clone();
        use_effect_with((*species.data).clone(), move |loaded| {
            if especie_id.is_empty() {
                if let Some(first) = loaded.as_ref().and_then(|list| list.first()) {
                    especie_id.set(first.id.to_string());
                }
            }
            || ()
        });
    }

    // Prefill when editing
    {
        let api = props.api.clone();
        let numero_etiqueta = numero_etiqueta.clone();
        let nombre = nombre.clone();
        let especie_id = especie_id.clone();
        let fecha_nacimiento = fecha_nacimiento.clone();
        let estado = estado.clone();
        let fecha_compra = fecha_compra.clone();
        let precio_compra = precio_compra.clone();
        let form_error = form_error.clone();

        use_effect_with(props.animal_id, move |animal_id| {
            if let Some(id) = *animal_id {
                spawn_local(async move {
                    match api.get_animal(id).await {
                        Ok(detail) => {
                            let animal = detail.animal;
                            numero_etiqueta.set(animal.numero_etiqueta);
                            nombre.set(animal.nombre.unwrap_or_default());
                            especie_id.set(animal.especie_id.to_string());
                            fecha_nacimiento.set(date_input_value(animal.fecha_nacimiento.as_deref()));
                            estado.set(animal.estado);
                            fecha_compra.set(date_input_value(animal.fecha_compra.as_deref()));
                            precio_compra.set(animal.precio_compra.map(|p| p.to_string()).unwrap_or_default());
                        }
                        Err(e) => form_error.set(Some(e)),
                    }
                });
            }
            || ()
        });
    }

    let on_submit = {
        let api = props.api.clone();
        let on_navigate = props.on_navigate.clone();
        let animal_id = props.animal_id;
        let numero_etiqueta = numero_etiqueta.clone();
        let nombre = nombre.clone();
        let especie_id = especie_id.clone();
        let fecha_nacimiento = fecha_nacimiento.clone();
        let estado = estado.clone();
        let fecha_compra = fecha_compra.clone();
        let precio_compra = precio_compra.clone();
        let saving = saving.clone();
        let form_error = form_error.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let request = AnimalRequest {
                numero_etiqueta: optional(&numero_etiqueta),
                nombre: optional(&nombre),
                especie_id: optional(&especie_id).map(NumericInput::Text),
                fecha_nacimiento: optional(&fecha_nacimiento),
                estado: optional(&estado),
                fecha_compra: optional(&fecha_compra),
                precio_compra: optional(&precio_compra).map(NumericInput::Text),
            };

            let api = api.clone();
            let on_navigate = on_navigate.clone();
            let saving = saving.clone();
            let form_error = form_error.clone();

            spawn_local(async move {
                saving.set(true);
                form_error.set(None);

                let result = match animal_id {
                    Some(id) => api.update_animal(id, &request).await,
                    None => api.create_animal(&request).await,
                };

                match result {
                    Ok(animal) => on_navigate.emit(Page::AnimalDetail(animal.id)),
                    Err(e) => {
                        gloo::console::error!("Failed to save animal:", e.clone());
                        form_error.set(Some(e));
                    }
                }

                saving.set(false);
            });
        })
    };

    let on_cancel = {
        let on_navigate = props.on_navigate.clone();
        let animal_id = props.animal_id;
        Callback::from(move |_: MouseEvent| {
            on_navigate.emit(animal_id.map(Page::AnimalDetail).unwrap_or(Page::Animals))
        })
    };

    let title = if props.animal_id.is_some() { "Editar Animal" } else { "Registrar Nuevo Animal" };
    let species_list = (*species.data).clone().unwrap_or_default();

    html! {
        <main class="page">
            <h1>{title}</h1>
            <FormMessage message={(*form_error).clone()} />

            <form class="record-form" onsubmit={on_submit}>
                <div class="form-group">
                    <label for="numero_etiqueta">{"Número de Etiqueta"}</label>
                    <input
                        type="text"
                        id="numero_etiqueta"
                        required=true
                        value={(*numero_etiqueta).clone()}
                        onchange={bind_input(&numero_etiqueta)}
                    />
                </div>

                <div class="form-group">
                    <label for="nombre">{"Nombre"}</label>
                    <input type="text" id="nombre" value={(*nombre).clone()} onchange={bind_input(&nombre)} />
                </div>

                <div class="form-group">
                    <label for="especie">{"Especie"}</label>
                    <select id="especie" onchange={bind_select(&especie_id)}>
                        if species_list.is_empty() {
                            <option>{"Cargando especies..."}</option>
                        }
                        {for species_list.iter().map(|s| html! {
                            <option value={s.id.to_string()} selected={*especie_id == s.id.to_string()}>
                                {&s.nombre}
                            </option>
                        })}
                    </select>
                </div>

                <div class="form-group">
                    <label for="estado">{"Estado"}</label>
                    <select id="estado" onchange={bind_select(&estado)}>
                        {for [STATUS_ACTIVE, STATUS_SOLD, STATUS_DECEASED].into_iter().map(|value| html! {
                            <option value={value} selected={*estado == value}>{status_label(value)}</option>
                        })}
                    </select>
                </div>

                <div class="form-group">
                    <label for="fecha_nacimiento">{"Fecha de Nacimiento"}</label>
                    <input
                        type="date"
                        id="fecha_nacimiento"
                        value={(*fecha_nacimiento).clone()}
                        onchange={bind_input(&fecha_nacimiento)}
                    />
                </div>

                <div class="form-group">
                    <label for="fecha_compra">{"Fecha de Compra"}</label>
                    <input
                        type="date"
                        id="fecha_compra"
                        value={(*fecha_compra).clone()}
                        onchange={bind_input(&fecha_compra)}
                    />
                </div>

                <div class="form-group">
                    <label for="precio_compra">{"Precio de Compra"}</label>
                    <input
                        type="number"
                        id="precio_compra"
                        step="0.01"
                        value={(*precio_compra).clone()}
                        onchange={bind_input(&precio_compra)}
                    />
                </div>

                <div class="form-actions">
                    <button type="submit" class="btn btn-primary" disabled={*saving}>
                        {if *saving { "Guardando..." } else { "Guardar" }}
                    </button>
                    <button type="button" class="btn" onclick={on_cancel}>{"Cancelar"}</button>
                </div>
            </form>
        </main>
    }
}
