use shared::money::format_rupiah;
use shared::{Material, Product, ProductMaterial};
use yew::prelude::*;

use super::list_body;
use crate::components::confirm_delete_modal::ConfirmDeleteModal;
use crate::components::product_modal::ProductModal;
use crate::components::stock_modal::StockModal;
use crate::components::toast::ToastView;
use crate::hooks::use_entity_list::use_entity_list;
use crate::hooks::use_entity_modal::use_entity_modal;
use crate::hooks::use_toast::use_toast;
use crate::services::api::ApiClient;
use crate::state::forms::product::ProductForm;
use crate::state::forms::stock::StockForm;

#[derive(Properties, PartialEq)]
pub struct ProductsPageProps {
    pub api_client: ApiClient,
}

/// "Flour 0.5 kg" using the material list when the product row lacks a name
fn describe_material(line: &ProductMaterial, materials: &[Material]) -> String {
    let name = line.material_name.clone().unwrap_or_else(|| {
        materials
            .iter()
            .find(|material| material.id == line.material_id)
            .map(|material| material.material_name.clone())
            .unwrap_or_else(|| format!("Material #{}", line.material_id))
    });
    format!("{} {} {}", name, line.amount_per_product, line.weight_unit)
}

#[function_component(ProductsPage)]
pub fn products_page(props: &ProductsPageProps) -> Html {
    let toast = use_toast();
    let list = use_entity_list::<Product>(&props.api_client, toast.show.clone());
    let materials = use_entity_list::<Material>(&props.api_client, toast.show.clone());
    let product_modal = use_entity_modal::<ProductForm>(&props.api_client, list.actions.on_mutated.clone());
    let stock_modal = use_entity_modal::<StockForm>(&props.api_client, list.actions.on_mutated.clone());

    let on_add = product_modal.actions.open_create.reform(|_: MouseEvent| ());
    let on_edit = {
        let state = product_modal.state.clone();
        Callback::from(move |product: Product| {
            let mut next = (*state).clone();
            next.open_edit(&product);
            state.set(next);
        })
    };
    let on_restock = {
        let state = stock_modal.state.clone();
        Callback::from(move |product: Product| {
            let mut next = (*state).clone();
            next.open_edit(&product);
            state.set(next);
        })
    };

    let known_materials = materials.state.items.clone();

    let actions = |product: &Product| -> Html {
        let edit = {
            let product = product.clone();
            on_edit.reform(move |_: MouseEvent| product.clone())
        };
        let restock = {
            let product = product.clone();
            on_restock.reform(move |_: MouseEvent| product.clone())
        };
        let delete = {
            let product = product.clone();
            list.actions.request_delete.reform(move |_: MouseEvent| product.clone())
        };
        html! {
            <>
                <button type="button" class="btn btn-link" onclick={restock}>{"Add Stock"}</button>
                <button type="button" class="btn btn-link" onclick={edit}>{"Edit"}</button>
                <button type="button" class="btn btn-link btn-danger-text" onclick={delete}>{"Delete"}</button>
            </>
        }
    };

    let image = |product: &Product| -> Html {
        match &product.image {
            Some(url) => html! { <img class="product-image" src={url.clone()} alt={product.product_name.clone()} /> },
            None => html! { <div class="product-image product-image-empty">{"📦"}</div> },
        }
    };

    let recipe = |product: &Product| -> Html {
        html! {
            <ul class="product-materials">
                {for product.materials.iter().map(|line| html! {
                    <li>{describe_material(line, &known_materials)}</li>
                })}
            </ul>
        }
    };

    let rows = |products: &[Product]| -> Html {
        html! {
            <>
                <table class="record-table desktop-only">
                    <thead>
                        <tr>
                            <th></th>
                            <th>{"Product"}</th>
                            <th>{"Price"}</th>
                            <th>{"Stock"}</th>
                            <th>{"Materials"}</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        {for products.iter().map(|product| html! {
                            <tr key={product.id.to_string()}>
                                <td>{image(product)}</td>
                                <td>{product.product_name.clone()}</td>
                                <td>{format_rupiah(product.price)}</td>
                                <td class={classes!((product.stock <= 0).then_some("out-of-stock"))}>{product.stock}</td>
                                <td>{recipe(product)}</td>
                                <td class="row-actions">{actions(product)}</td>
                            </tr>
                        })}
                    </tbody>
                </table>
                <div class="record-cards mobile-only">
                    {for products.iter().map(|product| html! {
                        <div class="record-card product-card" key={product.id.to_string()}>
                            {image(product)}
                            <div class="record-card-header">
                                <strong>{product.product_name.clone()}</strong>
                                <span>{format_rupiah(product.price)}</span>
                            </div>
                            <div class="record-card-body">
                                <span>{format!("Stock: {}", product.stock)}</span>
                                {if let Some(description) = &product.description {
                                    html! { <p class="product-description">{description.clone()}</p> }
                                } else {
                                    html! {}
                                }}
                                {recipe(product)}
                            </div>
                            <div class="record-card-actions">{actions(product)}</div>
                        </div>
                    })}
                </div>
            </>
        }
    };

    let delete_message = list
        .state
        .pending_delete
        .as_ref()
        .map(|product| format!("Delete \"{}\"? This cannot be undone.", product.product_name));

    html! {
        <div class="page products-page">
            <ToastView toast={toast.current.clone()} on_dismiss={toast.dismiss.clone()} />
            <div class="page-header">
                <h2>{"Products"}</h2>
                <button type="button" class="btn btn-primary" onclick={on_add}>{"Add Product"}</button>
            </div>
            {list_body(list.state.view(), "products", rows)}
            <ProductModal
                state={(*product_modal.state).clone()}
                actions={product_modal.actions.clone()}
                materials={materials.state.items.clone()}
            />
            <StockModal state={(*stock_modal.state).clone()} actions={stock_modal.actions.clone()} />
            <ConfirmDeleteModal
                is_open={delete_message.is_some()}
                title="Delete Product"
                message={delete_message.clone().unwrap_or_default()}
                busy={list.state.deleting}
                on_confirm={list.actions.confirm_delete.clone()}
                on_cancel={list.actions.cancel_delete.clone()}
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::{EntityId, WeightUnit};

    #[test]
    fn test_describe_material_falls_back_to_catalogue() {
        let line = ProductMaterial {
            material_id: EntityId::from(1),
            material_name: None,
            amount_per_product: 0.25,
            weight_unit: WeightUnit::Kg,
        };
        let catalogue = vec![Material {
            id: EntityId::from(1),
            material_name: "Flour".into(),
            price_per_unit: 12000.0,
            weight: 1.0,
            weight_unit: WeightUnit::Kg,
        }];
        assert_eq!(describe_material(&line, &catalogue), "Flour 0.25 kg");
        assert_eq!(describe_material(&line, &[]), "Material #1 0.25 kg");
    }
}
