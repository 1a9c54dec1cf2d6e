//! Math Answer Editor Component
//!
//! Answer entries of the math question form with their conditional fields.

use leptos::prelude::*;

use crate::math_fields::MathAnswerFields;
use crate::models::MathAnswerSetup;

/// Accuracy selector options
const ACCURACY_KINDS: &[(&str, &str)] = &[
    ("", "---"),
    ("exact", "Exact"),
    ("decimal_places", "Decimal places"),
    ("significant_figures", "Significant figures"),
    ("percent_error", "Percent error"),
];

#[component]
pub fn MathAnswerEditor(answers: Vec<MathAnswerSetup>) -> impl IntoView {
    answers
        .into_iter()
        .enumerate()
        .map(|(index, setup)| view! { <MathAnswerEntry index=index setup=setup /> })
        .collect_view()
}

#[component]
fn MathAnswerEntry(index: usize, setup: MathAnswerSetup) -> impl IntoView {
    let fields = RwSignal::new(MathAnswerFields::from_setup(&setup));
    let prefix = format!("answers-{}", index);
    let units_name = format!("{}-units", prefix);
    let radio_name = format!("{}-units_given", prefix);
    let accuracy_name = format!("{}-accuracy", prefix);
    let degree_name = format!("{}-accuracy_degree", prefix);

    view! {
        <div class="math-answer">
            <div class="item-units">
                <label>"Units"</label>
                <input
                    type="text"
                    class="units-input"
                    name=units_name
                    prop:value=move || fields.with(|f| f.units.clone())
                    on:focusin=move |_| fields.update(|f| f.focus_units())
                    on:focusout=move |_| fields.update(|f| f.blur_units())
                    on:input=move |ev| fields.update(|f| f.set_units(event_target_value(&ev)))
                />
            </div>

            {move || fields.with(|f| f.units_given_visible()).then(|| {
                let radio_name = radio_name.clone();
                view! {
                    <div class="item-units_given">
                        <label>
                            <input
                                type="radio"
                                class="units-given-radio"
                                name=radio_name.clone()
                                value="true"
                                prop:checked=move || fields.with(|f| f.units_given == Some(true))
                                on:change=move |_| fields.update(|f| f.units_given = Some(true))
                            />
                            "Units given"
                        </label>
                        <label>
                            <input
                                type="radio"
                                class="units-given-radio"
                                name=radio_name
                                value="false"
                                prop:checked=move || fields.with(|f| f.units_given == Some(false))
                                on:change=move |_| fields.update(|f| f.units_given = Some(false))
                            />
                            "Units must be entered"
                        </label>
                    </div>
                }
            })}

            <div class="item-accuracy">
                <label>"Accuracy"</label>
                <select
                    class="math-accuracy-selector"
                    name=accuracy_name
                    on:change=move |ev| fields.update(|f| f.set_accuracy(event_target_value(&ev)))
                >
                    {ACCURACY_KINDS.iter().map(|&(value, label)| view! {
                        <option
                            value=value
                            selected=move || fields.with(|f| f.accuracy == value)
                        >
                            {label}
                        </option>
                    }).collect_view()}
                </select>
            </div>

            {move || fields.with(|f| f.accuracy_degree_visible()).then(|| view! {
                <div class="item-accuracy_degree">
                    <label>"Degree"</label>
                    <input
                        type="number"
                        class="math-accuracy-degree"
                        name=degree_name.clone()
                        prop:value=move || fields.with(|f| f.accuracy_degree.clone())
                        on:input=move |ev| fields.update(|f| f.accuracy_degree = event_target_value(&ev))
                    />
                </div>
            })}
        </div>
    }
}
