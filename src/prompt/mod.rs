//! Prompt construction for description generation.
//!
//! Pure functions: an [`EventDraft`] in, two strings out. The remote model
//! is additionally constrained by the JSON schema in
//! [`crate::client::schema`]; the prompt repeats the essentials in Polish
//! because the style rules cannot be expressed as a schema.

use chrono::{DateTime, Datelike, Utc};

use crate::event::{EventDraft, MAX_DESCRIPTION_CHARS};

/// Build the system instruction for the copywriting model.
pub fn system_prompt() -> String {
    let mut prompt = String::new();

    prompt.push_str(
        "Jesteś copywriterem instytucji kultury. Piszesz po polsku krótkie opisy \
         marketingowe wydarzeń kulturalnych.\n\n",
    );

    prompt.push_str("Zasady:\n");
    prompt.push_str(&format!(
        "- Opis ma najwyżej {MAX_DESCRIPTION_CHARS} znaków.\n"
    ));
    prompt.push_str("- Ton formalny, ale ciepły i zapraszający.\n");
    prompt.push_str(
        "- Unikaj wyświechtanych zwrotów w rodzaju \"niezapomniane wrażenia\" \
         czy \"wyjątkowa atmosfera\".\n",
    );
    prompt.push_str(
        "- Kolejność: najpierw co i gdzie się odbywa, potem dlaczego warto \
         przyjść, na końcu szczegóły praktyczne.\n",
    );
    prompt.push_str(
        "- Pole z lokalizacją bywa miastem, dzielnicą, adresem albo potocznym \
         opisem miejsca (np. \"park przy fontannie\"); dobierz do niego \
         właściwą formę gramatyczną.\n\n",
    );

    prompt.push_str("Odpowiadasz wyłącznie obiektem JSON z jednym polem \"description\".");

    prompt
}

/// Build the user instruction, interpolating all draft fields.
pub fn user_prompt(draft: &EventDraft) -> String {
    format!(
        "Napisz opis wydarzenia:\n\
         - Tytuł: {title}\n\
         - Lokalizacja: {city}\n\
         - Data: {date}\n\
         - Kategoria: {category}\n\
         - Grupa wiekowa: {age}\n\
         - Kluczowe informacje: {info}",
        title = draft.title,
        city = draft.city,
        date = polish_long_date(draft.event_date),
        category = draft.category,
        age = draft.age_category,
        info = draft.key_information,
    )
}

/// Render a date in Polish long form, e.g. `1 grudnia 2025`.
///
/// Month names are in the genitive case, as dates read in running text.
fn polish_long_date(date: DateTime<Utc>) -> String {
    const MONTHS: [&str; 12] = [
        "stycznia",
        "lutego",
        "marca",
        "kwietnia",
        "maja",
        "czerwca",
        "lipca",
        "sierpnia",
        "września",
        "października",
        "listopada",
        "grudnia",
    ];
    let month = MONTHS[date.month0() as usize];
    format!("{} {} {}", date.day(), month, date.year())
}
