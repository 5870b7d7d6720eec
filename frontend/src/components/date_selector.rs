use chrono::NaiveDate;
use shared::calendar::WEEKDAY_LABELS;
use shared::dates::{format_display, format_wire, today};
use shared::{CalendarCell, CalendarState};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct DateSelectorProps {
    /// Date to open on; unreadable or missing means today
    #[prop_or_default]
    pub seed: Option<String>,
    /// Receives the picked day as `DD/MM/YY`
    #[prop_or_default]
    pub on_select: Callback<String>,
    /// Receives the picked day as a full date
    #[prop_or_default]
    pub on_select_date: Callback<NaiveDate>,
}

/// Month grid calendar.
///
/// Keeps its own visible month and selection for as long as it is mounted.
/// Picking a day reports it straight away; closing the calendar is up to the
/// owner.
#[function_component(DateSelector)]
pub fn date_selector(props: &DateSelectorProps) -> Html {
    let calendar = {
        let seed = props.seed.clone();
        use_state(move || CalendarState::seeded(seed.as_deref(), today()))
    };

    let on_previous = {
        let calendar = calendar.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*calendar).clone();
            next.previous_month();
            calendar.set(next);
        })
    };

    let on_next = {
        let calendar = calendar.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*calendar).clone();
            next.next_month();
            calendar.set(next);
        })
    };

    let on_pick = {
        let calendar = calendar.clone();
        let on_select = props.on_select.clone();
        let on_select_date = props.on_select_date.clone();
        Callback::from(move |day: u32| {
            let mut next = (*calendar).clone();
            if let Some(picked) = next.pick_date(day) {
                calendar.set(next);
                on_select.emit(format_display(picked));
                on_select_date.emit(picked);
            }
        })
    };

    let grid = calendar.grid(today());

    let render_cell = |cell: &CalendarCell| -> Html {
        match *cell {
            CalendarCell::Blank => html! { <td class="date-selector-blank"></td> },
            CalendarCell::Day { day, selected, today: is_today } => {
                let onclick = on_pick.reform(move |_: MouseEvent| day);
                html! {
                    <td>
                        <button
                            type="button"
                            class={classes!(
                                "date-selector-day",
                                selected.then_some("selected"),
                                is_today.then_some("today")
                            )}
                            {onclick}
                        >
                            {day}
                        </button>
                    </td>
                }
            }
        }
    };

    html! {
        <div class="date-selector">
            <div class="date-selector-header">
                <button type="button" class="date-selector-nav" onclick={on_previous} aria-label="Previous month">
                    {"‹"}
                </button>
                <span class="date-selector-title">{grid.month.title()}</span>
                <button type="button" class="date-selector-nav" onclick={on_next} aria-label="Next month">
                    {"›"}
                </button>
            </div>
            <table class="date-selector-grid">
                <thead>
                    <tr>
                        {for WEEKDAY_LABELS.iter().map(|label| html! { <th>{*label}</th> })}
                    </tr>
                </thead>
                <tbody>
                    {for grid.weeks.iter().map(|week| html! {
                        <tr>{for week.iter().map(render_cell)}</tr>
                    })}
                </tbody>
            </table>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct DateFieldProps {
    pub value: NaiveDate,
    pub on_change: Callback<NaiveDate>,
    #[prop_or_default]
    pub disabled: bool,
}

/// Read-only date box that opens a [`DateSelector`] and closes it on pick
#[function_component(DateField)]
pub fn date_field(props: &DateFieldProps) -> Html {
    let open = use_state(|| false);

    let on_toggle = {
        let open = open.clone();
        Callback::from(move |_: MouseEvent| open.set(!*open))
    };

    let on_select = {
        let open = open.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |picked: NaiveDate| {
            on_change.emit(picked);
            open.set(false);
        })
    };


    html! {
        <div class="date-field">
            <button type="button" class="date-field-toggle" onclick={on_toggle} disabled={props.disabled}>
                <span>{format_display(props.value)}</span>
                <span class="date-field-icon">{"📅"}</span>
            </button>
            {if *open && !props.disabled {
                html! { <DateSelector seed={Some(format_wire(props.value))} on_select_date={on_select} /> }
            } else {
                html! {}
            }}
        </div>
    }
}
