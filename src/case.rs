//! Locale-naive case mapping primitives
//!
//! Upper and lower case use the full Unicode mappings from `std`. Title case
//! follows the conventional "capitalize after any uncased character" rule:
//! digits, apostrophes and punctuation all start a new word. The first letter
//! of a word takes its Unicode titlecase mapping, so `ǆ` becomes `ǅ` and `ß`
//! becomes `Ss`.

use unicode_case_mapping::to_titlecase;

/// Map every cased character to its uppercase form.
pub fn uppercase(text: &str) -> String {
    text.to_uppercase()
}

/// Map every cased character to its lowercase form.
pub fn lowercase(text: &str) -> String {
    text.to_lowercase()
}

/// Titlecase the first cased character of each run of cased characters and
/// lowercase the rest of the run.
///
/// ```
/// use echo_case::titlecase;
///
/// assert_eq!(titlecase("hello world"), "Hello World");
/// assert_eq!(titlecase("they're 1st"), "They'Re 1St");
/// ```
pub fn titlecase(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    // Lowercasing the whole text once resolves final sigma against the full
    // string, including case-ignorable characters past the current word.
    let lowered_text = text.to_lowercase();
    let mut lowered = lowered_text.chars();
    let mut previous_cased = false;

    for c in text.chars() {
        let lower: String = lowered.by_ref().take(c.to_lowercase().count()).collect();
        let cased = is_cased(c);
        if cased && !previous_cased {
            push_titlecase(c, &mut out);
        } else {
            out.push_str(&lower);
        }
        previous_cased = cased;
    }

    out
}

fn push_titlecase(c: char, out: &mut String) {
    let mapped = to_titlecase(c);
    if mapped[0] == 0 {
        out.push(c);
        return;
    }
    out.extend(
        mapped
            .iter()
            .take_while(|&&cp| cp != 0)
            .filter_map(|&cp| char::from_u32(cp)),
    );
}

/// A character is cased when it carries a case distinction.
fn is_cased(c: char) -> bool {
    c.is_lowercase()
        || c.is_uppercase()
        || c.to_lowercase().ne(std::iter::once(c))
        || c.to_uppercase().ne(std::iter::once(c))
}
