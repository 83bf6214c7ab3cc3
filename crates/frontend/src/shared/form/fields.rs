use super::FormHandle;
use crate::shared::icons::icon;
use contracts::shared::form::DEFAULT_UNIQUE_KEY;
use contracts::shared::metadata::{display_value, FieldMetadata, InputKind};
use leptos::prelude::*;
use serde_json::{json, Number, Value};

/// Bag value typed into a number input: empty gives null, a number gives
/// a JSON number (decimal comma accepted), anything else stays text.
pub fn number_value(raw: &str) -> Value {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Value::Null;
    }
    trimmed
        .replace(',', ".")
        .parse::<f64>()
        .ok()
        .and_then(Number::from_f64)
        .map(Value::Number)
        .unwrap_or_else(|| Value::String(trimmed.to_string()))
}

/// Label, control and error message for one field
#[component]
pub fn FormField(form: FormHandle, field: FieldMetadata) -> impl IntoView {
    let name = field.name;
    let placeholder = field.ui.placeholder.unwrap_or("");
    let on_text = move |ev: leptos::ev::Event| {
        form.handle_change(name, Value::String(event_target_value(&ev)))
    };

    let control = match field.input {
        InputKind::TextArea => view! {
            <textarea
                class="form__textarea"
                id=name
                rows="3"
                placeholder=placeholder
                prop:value=move || form.text(name)
                on:input=on_text
            />
        }
        .into_any(),
        InputKind::Select(options) => view! {
            <select class="form__select" id=name on:change=on_text>
                <option value="" selected=move || form.text(name).is_empty()>
                    "Choisir..."
                </option>
                {options
                    .iter()
                    .map(|option| {
                        let option = *option;
                        view! {
                            <option value=option selected=move || form.text(name) == option>
                                {option}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        }
        .into_any(),
        InputKind::Tags => view! { <TagsField form=form field=field /> }.into_any(),
        InputKind::Number => view! {
            <input
                type="number"
                step="any"
                class="form__input"
                id=name
                placeholder=placeholder
                prop:value=move || form.text(name)
                on:input=move |ev| form.handle_change(name, number_value(&event_target_value(&ev)))
            />
        }
        .into_any(),
        other => view! {
            <input
                type=other.html_type()
                class="form__input"
                id=name
                placeholder=placeholder
                prop:value=move || form.text(name)
                on:input=on_text
            />
        }
        .into_any(),
    };

    view! {
        <div class=move || {
            if form.error(name).is_some() { "form__group form__group--error" } else { "form__group" }
        }>
            <label class="form__label" for=name>
                {field.ui.label}
                {field.validation.required.then(|| view! { <span class="form__required">" *"</span> })}
            </label>
            {control}
            {move || form.error(name).map(|message| view! { <div class="form__error">{message}</div> })}
        </div>
    }
}

/// Editable list of tags (skills, languages...)
#[component]
pub fn TagsField(form: FormHandle, field: FieldMetadata) -> impl IntoView {
    let name = field.name;
    let (draft, set_draft) = signal(String::new());

    let add = move || {
        let label = draft.get_untracked().trim().to_string();
        if label.is_empty() {
            return;
        }
        // same label twice is a no-op
        form.handle_array_add(name, json!({ "label": label }), "label");
        set_draft.set(String::new());
    };

    view! {
        <div class="tags">
            <div class="tags__list">
                {move || {
                    form.items(name)
                        .into_iter()
                        .map(|item| {
                            let label = display_value(item.get("label"));
                            view! {
                                <span class="tag">
                                    {label}
                                    <button
                                        type="button"
                                        class="tag__remove"
                                        title="Retirer"
                                        on:click=move |_| {
                                            form.handle_array_remove(name, &item, DEFAULT_UNIQUE_KEY)
                                        }
                                    >
                                        {icon("x")}
                                    </button>
                                </span>
                            }
                        })
                        .collect_view()
                }}
            </div>
            <div class="tags__input">
                <input
                    type="text"
                    class="form__input"
                    id=name
                    placeholder=field.ui.placeholder.unwrap_or("Ajouter...")
                    prop:value=move || draft.get()
                    on:input=move |ev| set_draft.set(event_target_value(&ev))
                    on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                        if ev.key() == "Enter" {
                            ev.prevent_default();
                            add();
                        }
                    }
                />
                <button type="button" class="button button--secondary" on:click=move |_| add()>
                    {icon("plus")}
                    "Ajouter"
                </button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_value() {
        assert_eq!(number_value(""), Value::Null);
        assert_eq!(number_value("  "), Value::Null);
        assert_eq!(number_value("1500"), json!(1500.0));
        assert_eq!(number_value("12,5"), json!(12.5));
        assert_eq!(number_value("abc"), json!("abc"));
    }
}
