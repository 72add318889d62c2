//! Placeholder substitution for message strings.
//!
//! Messages reference arguments by name (`{name}`) or by position (`{0}`).
//! Placeholders without a matching argument, and a `{` without a closing
//! `}`, are kept verbatim.

use rustc_hash::FxHashMap;
use std::borrow::Cow;

/// Arguments substituted into a message's placeholders.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormatArgs {
    values: FxHashMap<String, String>,
}

impl FormatArgs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Positional arguments: the first value fills `{0}`, the second `{1}`, and so on.
    pub fn list<I, V>(values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: ToString,
    {
        values
            .into_iter()
            .enumerate()
            .map(|(index, value)| (index.to_string(), value.to_string()))
            .collect()
    }

    pub fn with(mut self, name: impl Into<String>, value: impl ToString) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl ToString) {
        self.values.insert(name.into(), value.to_string());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for FormatArgs
where
    K: Into<String>,
    V: ToString,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut args = Self::new();
        for (name, value) in iter {
            args.insert(name, value);
        }
        args
    }
}

/// Substitutes `args` into the placeholders of `pattern`.
pub fn interpolate<'a>(pattern: &'a str, args: &FormatArgs) -> Cow<'a, str> {
    if args.is_empty() || !pattern.contains('{') {
        return Cow::Borrowed(pattern);
    }

    let mut output = String::with_capacity(pattern.len());
    let mut rest = pattern;

    while let Some(open) = rest.find('{') {
        output.push_str(&rest[..open]);
        let after_open = &rest[open + 1..];

        let Some(close) = after_open.find('}') else {
            output.push_str(&rest[open..]);
            return Cow::Owned(output);
        };

        let name = after_open[..close].trim();
        match args.get(name) {
            Some(value) => output.push_str(value),
            None => output.push_str(&rest[open..open + close + 2]),
        }
        rest = &after_open[close + 1..];
    }

    output.push_str(rest);
    Cow::Owned(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_arguments() {
        let args = FormatArgs::new().with("name", "Ada").with("count", 3);
        assert_eq!(
            interpolate("{name} has {count} databases", &args),
            "Ada has 3 databases"
        );
    }

    #[test]
    fn positional_arguments() {
        let args = FormatArgs::list(["prod", "mysql"]);
        assert_eq!(interpolate("{0} runs {1}", &args), "prod runs mysql");
    }

    #[test]
    fn whitespace_inside_braces_is_ignored() {
        let args = FormatArgs::new().with("name", "Ada");
        assert_eq!(interpolate("Hi { name }!", &args), "Hi Ada!");
    }

    #[test]
    fn unresolved_placeholders_stay_verbatim() {
        let args = FormatArgs::new().with("name", "Ada");
        assert_eq!(
            interpolate("{name} and {other}", &args),
            "Ada and {other}"
        );
    }

    #[test]
    fn unterminated_brace_stays_verbatim() {
        let args = FormatArgs::new().with("name", "Ada");
        assert_eq!(interpolate("{name} {broken", &args), "Ada {broken");
    }

    #[test]
    fn no_arguments_borrows_pattern() {
        assert!(matches!(
            interpolate("{name}", &FormatArgs::new()),
            Cow::Borrowed("{name}")
        ));
    }
}
