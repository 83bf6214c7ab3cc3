use super::{confirm, FormMode};
use crate::shared::form::{use_record_form, FormField};
use crate::shared::icons::icon;
use crate::shared::modal::Modal;
use crate::shared::notify::use_notifications;
use crate::shared::persisted_list::PersistedList;
use contracts::domain::common::PortalRecord;
use leptos::prelude::*;

/// Create or edit form of one record, shown in a modal.
///
/// Saving validates the form first; nothing is written while a rule fails.
pub fn record_form_modal<R: PortalRecord>(
    list: PersistedList<R>,
    mode: FormMode,
    state: RwSignal<FormMode>,
) -> AnyView {
    let meta = R::metadata();
    let notifications = use_notifications();

    let (existing, title) = match &mode {
        FormMode::Closed => return ().into_any(),
        FormMode::Create => (None, format!("{} (nouveau)", meta.ui.element_name)),
        FormMode::Edit(id) => match list.get_untracked(id) {
            Some(record) => {
                let title = format!("{} : {}", meta.ui.element_name, record.title());
                (Some(record), title)
            }
            None => {
                log::warn!("'{}': record {} not found", R::storage_key(), id);
                return ().into_any();
            }
        },
    };
    let is_edit = existing.is_some();
    let form = use_record_form(&existing.unwrap_or_default());

    let close = Callback::new(move |_: ()| {
        if form.is_dirty() && !confirm("Abandonner les modifications en cours ?") {
            return;
        }
        state.set(FormMode::Closed);
    });

    let submit = move || match form.submit::<R>() {
        Ok(None) => {}
        Ok(Some(record)) => {
            let label = record.title();
            if is_edit {
                if !list.update(record) {
                    if let Some(n) = notifications {
                        n.error("Cet enregistrement n'existe plus");
                    }
                    return;
                }
            } else {
                list.add(record);
            }
            if let Some(n) = notifications {
                n.success(format!("« {} » enregistré", label));
            }
            state.set(FormMode::Closed);
        }
        Err(e) => {
            log::warn!("'{}': form values rejected: {}", R::storage_key(), e);
            if let Some(n) = notifications {
                n.error(format!("Données invalides : {}", e));
            }
        }
    };

    let fields: Vec<_> = R::fields()
        .iter()
        .copied()
        .filter(|f| f.visible_in_form())
        .collect();

    view! {
        <Modal title=title on_close=close>
            <form
                class="details-form"
                novalidate=true
                on:submit=move |ev| {
                    ev.prevent_default();
                    submit();
                }
            >
                {fields
                    .into_iter()
                    .map(|field| view! { <FormField form=form field=field /> })
                    .collect_view()}
                <div class="details-form__actions">
                    <button type="submit" class="button button--primary">
                        {icon("save")}
                        {if is_edit { "Enregistrer" } else { "Créer" }}
                    </button>
                    <button
                        type="button"
                        class="button button--secondary"
                        disabled=move || !form.is_dirty()
                        on:click=move |_| form.reset()
                    >
                        {icon("refresh")}
                        "Réinitialiser"
                    </button>
                    <button type="button" class="button button--secondary" on:click=move |_| close.run(())>
                        {icon("x")}
                        "Annuler"
                    </button>
                </div>
            </form>
        </Modal>
    }
    .into_any()
}
