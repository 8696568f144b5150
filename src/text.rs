//! Small text-assembly helpers used by narration.

/// Join a list into prose: "a", "a and b", "a, b, and c".
pub fn commify(items: &[String]) -> String {
    match items {
        [] => String::new(),
        [only] => only.clone(),
        [first, second] => format!("{first} and {second}"),
        [init @ .., last] => format!("{}, and {last}", init.join(", ")),
    }
}

/// Prefix a noun phrase with its indefinite article.
pub fn a(noun: &str) -> String {
    let vowel_start = noun
        .chars()
        .next()
        .is_some_and(|c| "aeiouAEIOU".contains(c));
    if vowel_start {
        format!("an {noun}")
    } else {
        format!("a {noun}")
    }
}

/// Wrap narration to the terminal, capped so long lines stay readable
/// on very wide terminals. Raw command output never goes through here.
pub fn wrap(text: &str) -> String {
    textwrap::fill(text, textwrap::termwidth().min(80))
}
