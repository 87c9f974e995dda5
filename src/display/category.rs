//! Category display formatting

use crate::models::Category;

/// Format every category as a numbered menu, in declaration order
pub fn format_category_menu() -> String {
    let mut output = String::from("Categories:\n");

    for (i, category) in Category::ALL.iter().enumerate() {
        output.push_str(&format!(
            "{:>3}. {:<15} {}\n",
            i + 1,
            category.display_name(),
            category.identifier()
        ));
    }

    output
}
