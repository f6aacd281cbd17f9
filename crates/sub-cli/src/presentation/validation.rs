use sub_runtime::ValidationError;

/// Plain `path: message` lines, one per problem
pub fn render_plain(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}
