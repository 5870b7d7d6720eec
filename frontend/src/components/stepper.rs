use yew::prelude::*;

use super::input_value;

#[derive(Properties, PartialEq)]
pub struct StepperProps {
    pub value: i64,
    /// +1 / -1 from the buttons
    pub on_step: Callback<i64>,
    /// A typed value; anything unreadable arrives as 0
    pub on_input: Callback<i64>,
    #[prop_or_default]
    pub disabled: bool,
}

#[function_component(Stepper)]
pub fn stepper(props: &StepperProps) -> Html {
    let on_decrement = props.on_step.reform(|_: MouseEvent| -1);
    let on_increment = props.on_step.reform(|_: MouseEvent| 1);
    let on_input = props
        .on_input
        .reform(|e: InputEvent| input_value(&e).trim().parse::<i64>().unwrap_or(0));

    html! {
        <div class="stepper">
            <button type="button" class="stepper-button" onclick={on_decrement}
                disabled={props.disabled || props.value <= 1}>{"−"}</button>
            <input type="number" class="stepper-input" min="1"
                value={props.value.to_string()} oninput={on_input} disabled={props.disabled} />
            <button type="button" class="stepper-button" onclick={on_increment}
                disabled={props.disabled}>{"+"}</button>
        </div>
    }
}
