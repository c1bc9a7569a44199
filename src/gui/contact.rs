use eframe::egui::{
    self,
    RichText,
    Stroke,
    Ui,
};

use super::layout::{
    to_bounds,
    PageView,
};
use crate::{
    contact::{
        feedback::FEEDBACK_FADE,
        ContactForm,
        FeedbackKind,
        FieldName,
        FieldStatus,
    },
    page::PageEvent,
};

pub fn show(ui: &mut Ui, view: &mut PageView<'_>) {
    let page = view.page;
    let Some(form) = page.contact() else {
        return;
    };
    let ctx = ui.ctx().clone();

    if let Some(contact) = &page.content().contact {
        if !contact.blurb.is_empty() {
            ui.label(RichText::new(&contact.blurb).size(16.0));
        }
    }

    ui.set_max_width(560.0);
    for name in FieldName::ALL {
        show_field(ui, view, form, name);
    }

    ui.add_space(8.0);
    let button = form.button();
    let label = if button.loading { "Sending..." } else { "Send Message" };
    let response = ui
        .add_enabled_ui(!button.disabled, |ui| {
            ui.horizontal(|ui| {
                let response = ui.add(
                    egui::Button::new(RichText::new(label).size(16.0)).min_size(egui::vec2(160.0, 40.0)),
                );
                if button.loading {
                    ui.add(egui::Spinner::new());
                }
                response
            })
            .inner
        })
        .inner;

    if response.clicked() {
        view.actions.page(PageEvent::Submit);
        if let Some(pos) = response.interact_pointer_pos() {
            view.actions.page(PageEvent::ButtonClick {
                button: to_bounds(response.rect),
                x: pos.x,
                y: pos.y,
            });
        }
    }

    let feedback = form.feedback();
    let opacity = ctx.animate_bool_with_time(
        egui::Id::new("form_feedback"),
        feedback.is_visible(),
        FEEDBACK_FADE.as_secs_f32(),
    );
    if !feedback.message().is_empty() {
        let color = match feedback.kind() {
            Some(FeedbackKind::Success) => view.theme.green(&ctx),
            _ => view.theme.red(&ctx),
        };
        ui.label(RichText::new(feedback.message()).color(color.gamma_multiply(opacity)));
    }
}

fn show_field(ui: &mut Ui, view: &mut PageView<'_>, form: &ContactForm, name: FieldName) {
    let ctx = ui.ctx().clone();
    let field = form.field(name);

    ui.label(name.label());
    let mut value = field.value.clone();
    let edit = if name.is_multiline() {
        egui::TextEdit::multiline(&mut value).desired_rows(5)
    } else {
        egui::TextEdit::singleline(&mut value)
    };

    let border = match field.status {
        FieldStatus::Neutral => None,
        FieldStatus::Error(_) => Some(view.theme.red(&ctx)),
        FieldStatus::Success => Some(view.theme.green(&ctx)),
    };

    let response = ui
        .scope(|ui| {
            if let Some(color) = border {
                let visuals = &mut ui.visuals_mut().widgets;
                visuals.inactive.bg_stroke = Stroke::new(1.5, color);
                visuals.hovered.bg_stroke = Stroke::new(1.5, color);
            }
            ui.add(edit.id_salt(name.key()).desired_width(f32::INFINITY))
        })
        .inner;

    if response.changed() {
        view.actions.page(PageEvent::FieldInput(name, value));
    }
    if response.lost_focus() {
        view.actions.page(PageEvent::FieldBlur(name));
    }

    if let Some(message) = field.error_message() {
        ui.label(RichText::new(message).small().color(view.theme.red(&ctx)));
    }
    ui.add_space(4.0);
}
