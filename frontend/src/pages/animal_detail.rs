use shared::{MedicalHistoryEntry, MedicalHistoryRequest, NumericInput, VaccinationEntry, VaccinationRequest};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::{navigate_to, RecordPageProps};
use crate::components::fields::{bind_input, bind_select, bind_textarea, optional};
use crate::components::{FormMessage, LoadingState};
use crate::hooks::use_resource;
use crate::navigation::Page;
use crate::services::api::ApiClient;
use crate::services::format::{animal_title, display_date, format_currency, status_label, today};

#[function_component(AnimalDetailPage)]
pub fn animal_detail_page(props: &RecordPageProps) -> Html {
    let animal_id = props.id;
    let detail = {
        let api = props.api.clone();
        use_resource(move || {
            let api = api.clone();
            async move { api.get_animal(animal_id).await }
        })
    };

    let on_delete_animal = {
        let api = props.api.clone();
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_: MouseEvent| {
            if !gloo::dialogs::confirm(
                "¿Estás seguro de que quieres eliminar este animal? Esta acción es irreversible.",
            ) {
                return;
            }
            let api = api.clone();
            let on_navigate = on_navigate.clone();
            spawn_local(async move {
                match api.delete_animal(animal_id).await {
                    Ok(()) => on_navigate.emit(Page::Animals),
                    Err(e) => gloo::dialogs::alert(&e),
                }
            });
        })
    };

    let on_delete_vaccination = {
        let api = props.api.clone();
        let reload = detail.reload.clone();
        Callback::from(move |record_id: i64| {
            if !gloo::dialogs::confirm("¿Seguro que quieres eliminar este registro de vacuna?") {
                return;
            }
            let api = api.clone();
            let reload = reload.clone();
            spawn_local(async move {
                match api.delete_vaccination(record_id).await {
                    Ok(()) => reload.emit(()),
                    Err(e) => gloo::dialogs::alert(&e),
                }
            });
        })
    };

    let content = match (*detail.data).as_ref() {
        Some(detail_data) => {
            let animal = &detail_data.animal;
            html! {
                <>
                    <div class="page-header">
                        <h1>{animal_title(animal.nombre.as_deref(), &animal.numero_etiqueta)}</h1>
                        <div>
                            <button class="btn btn-warning" onclick={navigate_to(&props.on_navigate, Page::EditAnimal(animal_id))}>
                                {"Editar"}
                            </button>
                            <button class="btn btn-danger" onclick={on_delete_animal}>{"Eliminar Animal"}</button>
                        </div>
                    </div>

                    <section class="card">
                        <h2>{"Información General"}</h2>
                        <div class="info-grid">
                            <p><strong>{"Número de Etiqueta: "}</strong>{&animal.numero_etiqueta}</p>
                            <p><strong>{"Especie: "}</strong>{&detail_data.especie.nombre}</p>
                            <p><strong>{"Estado: "}</strong>{status_label(&animal.estado)}</p>
                            <p><strong>{"Fecha de Nacimiento: "}</strong>{display_date(animal.fecha_nacimiento.as_deref())}</p>
                            <p><strong>{"Fecha de Compra: "}</strong>{display_date(animal.fecha_compra.as_deref())}</p>
                            <p>
                                <strong>{"Precio de Compra: "}</strong>
                                {animal.precio_compra.map(format_currency).unwrap_or_else(|| "N/A".to_string())}
                            </p>
                        </div>
                    </section>

                    <section class="card">
                        <h2>{"Historial de Vacunación"}</h2>
                        <VaccinationTable entries={detail_data.vacunaciones.clone()} on_delete={on_delete_vaccination} />
                        <VaccinationForm api={props.api.clone()} animal_id={animal_id} on_saved={detail.reload.clone()} />
                    </section>

                    <section class="card">
                        <h2>{"Historial Médico"}</h2>
                        <MedicalHistoryList entries={detail_data.historial_medico.clone()} />
                        <MedicalHistoryForm api={props.api.clone()} animal_id={animal_id} on_saved={detail.reload.clone()} />
                    </section>
                </>
            }
        }
        None => html! {},
    };

    html! {
        <main class="page">
            <button class="btn btn-link" onclick={navigate_to(&props.on_navigate, Page::Animals)}>
                {"← Volver a la lista"}
            </button>
            <LoadingState loading={*detail.loading} error={(*detail.error).clone()} label="detalles del animal">
                {content}
            </LoadingState>
        </main>
    }
}

#[derive(Properties, PartialEq)]
struct VaccinationTableProps {
    entries: Vec<VaccinationEntry>,
    on_delete: Callback<i64>,
}

#[function_component(VaccinationTable)]
fn vaccination_table(props: &VaccinationTableProps) -> Html {
    if props.entries.is_empty() {
        return html! { <p class="empty">{"No hay registros de vacunación."}</p> };
    }

    html! {
        <table class="data-table">
            <thead>
                <tr>
                    <th>{"Vacuna"}</th>
                    <th>{"Fecha de Aplicación"}</th>
                    <th>{"Próxima Dosis"}</th>
                    <th></th>
                </tr>
            </thead>
            <tbody>
                {for props.entries.iter().map(|entry| {
                    let record_id = entry.record.id;
                    let on_delete = props.on_delete.clone();
                    html! {
                        <tr key={record_id}>
                            <td>{&entry.vacuna.nombre}</td>
                            <td>{display_date(Some(entry.record.fecha_aplicacion.as_str()))}</td>
                            <td>{display_date(entry.record.proxima_dosis.as_deref())}</td>
                            <td>
                                <button class="btn btn-danger btn-small" onclick={Callback::from(move |_: MouseEvent| on_delete.emit(record_id))}>
                                    {"Eliminar"}
                                </button>
                            </td>
                        </tr>
                    }
                })}
            </tbody>
        </table>
    }
}

#[derive(Properties, PartialEq)]
struct HealthFormProps {
    api: ApiClient,
    animal_id: i64,
    on_saved: Callback<()>,
}

#[function_component(VaccinationForm)]
fn vaccination_form(props: &HealthFormProps) -> Html {
    let vacuna_id = use_state(String::new);
    let fecha_aplicacion = use_state(today);
    let proxima_dosis = use_state(String::new);
    let form_error = use_state(|| None::<String>);

    let vaccines = {
        let api = props.api.clone();
        use_resource(move || {
            let api = api.clone();
            async move { api.list_vaccines().await }
        })
    };

    {
        let vacuna_id = vacuna_id.clone();
        use_effect_with((*vaccines.data).clone(), move |loaded| {
            if vacuna_id.is_empty() {
                if let Some(first) = loaded.as_ref().and_then(|list| list.first()) {
                    vacuna_id.set(first.id.to_string());
                }
            }
            || ()
        });
    }

    let on_submit = {
        let api = props.api.clone();
        let animal_id = props.animal_id;
        let on_saved = props.on_saved.clone();
        let vacuna_id = vacuna_id.clone();
        let fecha_aplicacion = fecha_aplicacion.clone();
        let proxima_dosis = proxima_dosis.clone();
        let form_error = form_error.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            if vacuna_id.is_empty() {
                form_error.set(Some("Por favor, selecciona una vacuna.".to_string()));
                return;
            }

            let request = VaccinationRequest {
                vacuna_id: Some(NumericInput::Text((*vacuna_id).clone())),
                fecha_aplicacion: optional(&fecha_aplicacion),
                proxima_dosis: optional(&proxima_dosis),
            };
            let api = api.clone();
            let on_saved = on_saved.clone();
            let proxima_dosis = proxima_dosis.clone();
            let form_error = form_error.clone();

            spawn_local(async move {
                match api.add_vaccination(animal_id, &request).await {
                    Ok(_) => {
                        form_error.set(None);
                        proxima_dosis.set(String::new());
                        on_saved.emit(());
                    }
                    Err(e) => form_error.set(Some(e)),
                }
            });
        })
    };

    let vaccine_list = (*vaccines.data).clone().unwrap_or_default();

    html! {
        <form class="inline-form" onsubmit={on_submit}>
            <h3>{"Agregar Vacunación"}</h3>
            <FormMessage message={(*form_error).clone()} />
            <div class="form-row">
                <div class="form-group">
                    <label for="vacuna">{"Vacuna"}</label>
                    <select id="vacuna" onchange={bind_select(&vacuna_id)}>
                        if vaccine_list.is_empty() {
                            <option value="">{"No hay vacunas registradas"}</option>
                        }
                        {for vaccine_list.iter().map(|v| html! {
                            <option value={v.id.to_string()} selected={*vacuna_id == v.id.to_string()}>{&v.nombre}</option>
                        })}
                    </select>
                </div>
                <div class="form-group">
                    <label for="fecha_aplicacion">{"Fecha de Aplicación"}</label>
                    <input
                        type="date"
                        id="fecha_aplicacion"
                        value={(*fecha_aplicacion).clone()}
                        onchange={bind_input(&fecha_aplicacion)}
                    />
                </div>
                <div class="form-group">
                    <label for="proxima_dosis">{"Próxima Dosis"}</label>
                    <input
                        type="date"
                        id="proxima_dosis"
                        value={(*proxima_dosis).clone()}
                        onchange={bind_input(&proxima_dosis)}
                    />
                </div>
                <button type="submit" class="btn btn-primary">{"Agregar"}</button>
            </div>
        </form>
    }
}

#[derive(Properties, PartialEq)]
struct MedicalHistoryListProps {
    entries: Vec<MedicalHistoryEntry>,
}

#[function_component(MedicalHistoryList)]
fn medical_history_list(props: &MedicalHistoryListProps) -> Html {
    if props.entries.is_empty() {
        return html! { <p class="empty">{"Sin registros médicos."}</p> };
    }

    html! {
        <ul class="history-list">
            {for props.entries.iter().map(|entry| html! {
                <li key={entry.id}>
                    <strong>{display_date(Some(entry.fecha.as_str()))}</strong>
                    {format!(" {}", entry.descripcion)}
                    if let Some(tratamiento) = entry.tratamiento.as_ref() {
                        <div class="muted">{format!("Tratamiento: {}", tratamiento)}</div>
                    }
                    if let Some(veterinario) = entry.veterinario.as_ref() {
                        <div class="muted">{format!("Veterinario: {}", veterinario)}</div>
                    }
                </li>
            })}
        </ul>
    }
}

#[function_component(MedicalHistoryForm)]
fn medical_history_form(props: &HealthFormProps) -> Html {
    let fecha = use_state(today);
    let descripcion = use_state(String::new);
    let tratamiento = use_state(String::new);
    let veterinario = use_state(String::new);
    let form_error = use_state(|| None::<String>);

    let on_submit = {
        let api = props.api.clone();
        let animal_id = props.animal_id;
        let on_saved = props.on_saved.clone();
        let fecha = fecha.clone();
        let descripcion = descripcion.clone();
        let tratamiento = tratamiento.clone();
        let veterinario = veterinario.clone();
        let form_error = form_error.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let request = MedicalHistoryRequest {
                fecha: optional(&fecha),
                descripcion: optional(&descripcion),
                tratamiento: optional(&tratamiento),
                veterinario: optional(&veterinario),
            };
            let api = api.clone();
            let on_saved = on_saved.clone();
            let descripcion = descripcion.clone();
            let tratamiento = tratamiento.clone();
            let form_error = form_error.clone();

            spawn_local(async move {
                match api.add_medical_entry(animal_id, &request).await {
                    Ok(_) => {
                        form_error.set(None);
                        descripcion.set(String::new());
                        tratamiento.set(String::new());
                        on_saved.emit(());
                    }
                    Err(e) => form_error.set(Some(e)),
                }
            });
        })
    };

    html! {
        <form class="inline-form" onsubmit={on_submit}>
            <h3>{"Agregar Registro Médico"}</h3>
            <FormMessage message={(*form_error).clone()} />
            <div class="form-row">
                <div class="form-group">
                    <label for="fecha_medica">{"Fecha"}</label>
                    <input type="date" id="fecha_medica" value={(*fecha).clone()} onchange={bind_input(&fecha)} />
                </div>
                <div class="form-group">
                    <label for="veterinario">{"Veterinario"}</label>
                    <input type="text" id="veterinario" value={(*veterinario).clone()} onchange={bind_input(&veterinario)} />
                </div>
            </div>
            <div class="form-group">
                <label for="descripcion_medica">{"Descripción"}</label>
                <textarea id="descripcion_medica" value={(*descripcion).clone()} onchange={bind_textarea(&descripcion)} />
            </div>
            <div class="form-group">
                <label for="tratamiento">{"Tratamiento"}</label>
                <textarea id="tratamiento" value={(*tratamiento).clone()} onchange={bind_textarea(&tratamiento)} />
            </div>
            <button type="submit" class="btn btn-primary">{"Agregar"}</button>
        </form>
    }
}
