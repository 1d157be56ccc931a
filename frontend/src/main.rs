use form_model::{
    Field, FieldEntries,
    form,
    schema,
    state::{ErrorStates, FlagStates},
};
use zoon::{eprintln, println, *};
use zoon::{map_ref, Rgba};

const PAGE_BACKGROUND_GRADIENT: &str =
    "linear-gradient(155deg, #231746 0%, #141f33 48%, #0d323f 100%)";

fn card_surface_color() -> Rgba {
    color!("rgba(21, 27, 44, 0.92)")
}

fn input_surface_color() -> Rgba {
    color!("#101a2c")
}

fn primary_text_color() -> Rgba {
    color!("#f1f4ff")
}

fn muted_text_color() -> Rgba {
    color!("rgba(226, 232, 255, 0.7)")
}

fn error_text_color() -> Rgba {
    color!("LightCoral")
}

fn main() {
    start_app("app", SignupForm::new);
}

/// The signup form component: three independent merge-patch state slots plus
/// the raw entry snapshot, all private to this instance. Every handler runs
/// synchronously in its DOM callback; zoon serializes the updates before the
/// next render.
#[derive(Clone)]
struct SignupForm {
    entries: Mutable<FieldEntries>,
    errors: Mutable<ErrorStates>,
    changed: Mutable<FlagStates>,
    touched: Mutable<FlagStates>,
}

impl SignupForm {
    fn new() -> impl Element {
        Self {
            entries: Mutable::new(FieldEntries::new()),
            errors: Mutable::new(ErrorStates::new()),
            changed: Mutable::new(FlagStates::new()),
            touched: Mutable::new(FlagStates::new()),
        }
        .root()
    }

    // -- event handlers --

    /// Any input mutation: overwrite the snapshot, then replace `changed`
    /// and `errors` wholesale. `touched` is not involved.
    fn on_field_change(&self, field: Field, value: String) {
        let entries = {
            let mut entries = self.entries.lock_mut();
            entries.set(field, value);
            entries.clone()
        };
        let (changed, errors) = form::change_outcome(&entries);
        self.changed.set(changed);
        self.errors.set(errors);
    }

    /// Focus lost: the field stays touched for the rest of the session.
    fn on_field_blur(&self, field: Field) {
        let touched = self.touched.lock_ref().merge([(field, true)]);
        self.touched.set(touched);
    }

    /// Terminal action: report the coerced payload to the console sink.
    /// A real system would hand it to a backend client instead.
    fn on_submit(&self) {
        if !form::is_valid(&self.errors.lock_ref(), &self.changed.lock_ref()) {
            return;
        }
        match schema::validate(&self.entries.lock_ref()) {
            Ok(submission) => match serde_json::to_string(&submission) {
                Ok(payload) => println!("SUBMIT {payload}"),
                Err(error) => eprintln!("Failed to serialize submission: {error:#?}"),
            },
            Err(error) => eprintln!("Submit rejected: {error}"),
        }
    }

    // -- derived signals --

    /// Recomputes exactly when `errors` or `changed` changes, not otherwise.
    fn is_valid_signal(&self) -> impl Signal<Item = bool> + use<> {
        map_ref! {
            let errors = self.errors.signal_cloned(),
            let changed = self.changed.signal_cloned() =>
            form::is_valid(errors, changed)
        }
    }

    /// The helper text for a field, present iff the field is both touched
    /// and currently invalid.
    fn error_message_signal(&self, field: Field) -> impl Signal<Item = Option<String>> + use<> {
        map_ref! {
            let touched = self.touched.signal_cloned(),
            let errors = self.errors.signal_cloned() =>
            if touched.is_set(field) {
                errors.message(field).map(ToString::to_string)
            } else {
                None
            }
        }
    }

    // -- rendering --

    fn root(&self) -> impl Element + use<> {
        Stack::new()
            .s(Width::fill())
            .s(Height::fill())
            .layer(
                El::new()
                    .s(Width::fill())
                    .s(Height::fill())
                    .update_raw_el(|raw_el| raw_el.style("background", PAGE_BACKGROUND_GRADIENT)),
            )
            .layer(self.form_card())
    }

    fn form_card(&self) -> impl Element + use<> {
        Column::new()
            .s(Align::center())
            .s(Width::exact(360))
            .s(Padding::new().x(28).y(26))
            .s(Gap::new().y(18))
            .s(Background::new().color(card_surface_color()))
            .s(RoundedCorners::all(24))
            .s(Borders::all(
                Border::new()
                    .color(color!("rgba(255, 255, 255, 0.05)"))
                    .width(1),
            ))
            .s(Shadows::new([
                Shadow::new()
                    .color(color!("rgba(5, 10, 18, 0.55)"))
                    .y(34)
                    .blur(60)
                    .spread(-18),
            ]))
            .s(Font::new().color(primary_text_color()))
            .update_raw_el(|raw_el| raw_el.style("backdrop-filter", "blur(24px)"))
            .item(
                El::new()
                    .s(Font::new().size(18).weight(FontWeight::SemiBold))
                    .child("Sign up"),
            )
            .items(Field::ALL.map(|field| self.field_row(field)))
            .item(self.submit_button())
    }

    fn field_row(&self, field: Field) -> impl Element + use<> {
        Column::new()
            .s(Width::fill())
            .s(Gap::new().y(6))
            .item(
                El::new()
                    .s(Font::new().size(13).color(muted_text_color()))
                    .child(field.label()),
            )
            .item(self.field_input(field))
            .item_signal(
                self.error_message_signal(field)
                    .map(|message| message.map(error_line)),
            )
    }

    fn field_input(&self, field: Field) -> impl Element + use<> {
        TextInput::new()
            .s(Width::fill())
            .s(Padding::new().x(12).y(9))
            .s(RoundedCorners::all(12))
            .s(Font::new().size(15).color(primary_text_color()))
            .s(Background::new().color(input_surface_color()))
            .s(Borders::all(
                Border::new()
                    .color(color!("rgba(255, 255, 255, 0.08)"))
                    .width(1),
            ))
            .label_hidden(field.label())
            .placeholder(
                Placeholder::new(field.placeholder()).s(Font::new().color(muted_text_color())),
            )
            .text_signal(
                self.entries
                    .signal_cloned()
                    .map(move |entries| entries.get(field).to_string()),
            )
            .update_raw_el({
                let error_message = self.error_message_signal(field);
                move |raw_el| {
                    raw_el.style_signal(
                        "border-color",
                        error_message.map(|message| {
                            if message.is_some() {
                                "rgba(255, 134, 134, 0.6)"
                            } else {
                                "rgba(255, 255, 255, 0.08)"
                            }
                        }),
                    )
                }
            })
            .on_change({
                let this = self.clone();
                move |value| this.on_field_change(field, value)
            })
            .on_blur({
                let this = self.clone();
                move || this.on_field_blur(field)
            })
    }

    fn submit_button(&self) -> impl Element + use<> {
        let hovered = Mutable::new(false);
        let is_valid = self.is_valid_signal().broadcast();
        Button::new()
            .s(Width::fill())
            .s(Padding::new().x(14).y(9))
            .s(RoundedCorners::all(22))
            .s(
                Font::new()
                    .size(15)
                    .weight(FontWeight::SemiBold)
                    .color_signal(is_valid.signal().map_bool(
                        || color!("#052039"),
                        || color!("rgba(226, 232, 255, 0.45)"),
                    )),
            )
            .s(Background::new().color_signal(map_ref! {
                let hovered = hovered.signal(),
                let valid = is_valid.signal() =>
                match (*valid, *hovered) {
                    (true, true) => color!("rgba(140, 196, 255, 0.9)"),
                    (true, false) => color!("rgba(108, 162, 255, 0.75)"),
                    (false, _) => color!("rgba(60, 74, 104, 0.4)"),
                }
            }))
            .label(El::new().s(Align::center()).child("Submit"))
            .update_raw_el({
                let is_valid = is_valid.signal();
                move |raw_el| {
                    raw_el.attr_signal("disabled", is_valid.map_bool(|| None, || Some("")))
                }
            })
            .on_hovered_change(move |is_hovered| hovered.set_neq(is_hovered))
            .on_press({
                let this = self.clone();
                move || this.on_submit()
            })
    }
}

fn error_line(message: String) -> impl Element {
    El::new()
        .s(Font::new().size(13).color(error_text_color()))
        .child(message)
}
