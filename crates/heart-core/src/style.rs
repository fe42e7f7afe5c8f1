use crate::config::class_selector;

/// Keyframes for section entrances plus hidden/revealed states for the
/// scroll-revealed sections.
pub fn reveal_stylesheet(sections: &[&str], revealed_class: &str) -> String {
    let base = class_selector(sections);
    let revealed = sections
        .iter()
        .map(|c| format!(".{c}.{revealed_class}"))
        .collect::<Vec<_>>()
        .join(", ");

    let mut css = String::from(
        "@keyframes fadeInUp {\n  from { opacity: 0; transform: translateY(30px); }\n  to { opacity: 1; transform: translateY(0); }\n}\n",
    );
    if !sections.is_empty() {
        css.push_str(&format!(
            "{base} {{\n  opacity: 0;\n  transform: translateY(30px);\n  transition: opacity 0.8s ease, transform 0.8s ease;\n}}\n\
             {revealed} {{\n  opacity: 1;\n  transform: translateY(0);\n}}\n"
        ));
    }
    css
}
