use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ModalFrameProps {
    pub title: AttrValue,
    /// While true, clicks on the backdrop do not close the modal
    #[prop_or_default]
    pub busy: bool,
    pub on_close: Callback<()>,
    #[prop_or_default]
    pub error: Option<String>,
    #[prop_or_default]
    pub children: Html,
}

/// Backdrop, panel and error line shared by every dialog
#[function_component(ModalFrame)]
pub fn modal_frame(props: &ModalFrameProps) -> Html {
    let on_backdrop_click = {
        let on_close = props.on_close.clone();
        let busy = props.busy;
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            if !busy {
                on_close.emit(());
            }
        })
    };

    let on_modal_click = Callback::from(|e: MouseEvent| {
        e.stop_propagation();
    });

    html! {
        <div class="modal-backdrop" onclick={on_backdrop_click}>
            <div class="modal" onclick={on_modal_click}>
                <div class="modal-content">
                    <h3 class="modal-title">{props.title.clone()}</h3>
                    {if let Some(error) = props.error.clone() {
                        html! { <div class="modal-error">{error}</div> }
                    } else {
                        html! {}
                    }}
                    {props.children.clone()}
                </div>
            </div>
        </div>
    }
}
