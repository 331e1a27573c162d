use yew::prelude::*;

use super::{navigate_to, PageProps};
use crate::components::LoadingState;
use crate::hooks::use_resource;
use crate::navigation::Page;
use crate::services::format::status_label;

#[function_component(AnimalListPage)]
pub fn animal_list_page(props: &PageProps) -> Html {
    let animals = {
        let api = props.api.clone();
        use_resource(move || {
            let api = api.clone();
            async move { api.list_animals().await }
        })
    };

    let rows = (*animals.data).clone().unwrap_or_default();

    html! {
        <main class="page">
            <div class="page-header">
                <h1>{"Lista de Animales"}</h1>
                <button class="btn btn-primary" onclick={navigate_to(&props.on_navigate, Page::NewAnimal)}>
                    {"Registrar Nuevo Animal"}
                </button>
            </div>

            <LoadingState loading={*animals.loading} error={(*animals.error).clone()} label="animales">
                if rows.is_empty() {
                    <p class="empty">{"No hay animales registrados."}</p>
                } else {
                    <table class="data-table">
                        <thead>
                            <tr>
                                <th>{"Etiqueta"}</th>
                                <th>{"Nombre"}</th>
                                <th>{"Especie"}</th>
                                <th>{"Estado"}</th>
                                <th></th>
                            </tr>
                        </thead>
                        <tbody>
                            {for rows.iter().map(|entry| html! {
                                <tr key={entry.animal.id}>
                                    <td>{&entry.animal.numero_etiqueta}</td>
                                    <td>{entry.animal.nombre.clone().unwrap_or_else(|| "N/A".to_string())}</td>
                                    <td>{&entry.especie.nombre}</td>
                                    <td>{status_label(&entry.animal.estado)}</td>
                                    <td>
                                        <button
                                            class="btn btn-link"
                                            onclick={navigate_to(&props.on_navigate, Page::AnimalDetail(entry.animal.id))}
                                        >
                                            {"Ver Detalles"}
                                        </button>
                                    </td>
                                </tr>
                            })}
                        </tbody>
                    </table>
                }
            </LoadingState>
        </main>
    }
}
