//! Static catalog of best-practice tips, grouped by category.
//!
//! Tip descriptions may embed HTML markup; they are rendered as-is because
//! the catalog is trusted, compiled-in content.
//!
//! Sources:
//! - HTML: https://www.w3schools.com/html/html5_syntax.asp
//! - CSS: https://kinsta.com/blog/css-best-practices/
//! - JavaScript: https://www.w3schools.com/js/js_best_practices.asp

#[derive(Debug, Clone, Copy)]
pub struct Tip {
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct Category {
    pub name: &'static str,
    pub tips: &'static [Tip],
}

/// Derives the identifier used as the status-map key for a tip: the title
/// lowercased with whitespace runs replaced by single hyphens. Collisions
/// between distinct titles are not handled; the shipped catalog has none.
pub fn tip_id(title: &str) -> String {
    title
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
        .to_lowercase()
}

pub const CATALOG: &[Category] = &[
    Category {
        name: "HTML",
        tips: &[
            Tip {
                title: "Use lowercase element names",
                description: "Mixing uppercase and lowercase names looks inconsistent, and lowercase is easier to type.",
            },
            Tip {
                title: "Close all HTML elements",
                description: "Close all HTML elements, even if they are optional.<br/>This improves code readability.",
            },
            Tip {
                title: "Always quote attribute values",
                description: "Always quote attribute values to enhance readability and avoid errors.<br/>Quotes are mandatory if the value contains spaces.",
            },
            Tip {
                title: "Manage blank lines and indentation",
                description: "Avoid adding unnecessary blank lines, spaces, or indentation.<br/>Use blank lines to separate large or logical code blocks, and use two spaces for indentation.<br/>Avoid using the tab key.",
            },
            Tip {
                title: "Never skip the <title> element",
                description: "The <code>&lt;title&gt;</code> element is required in HTML.<br/>It is crucial for search engine optimization (SEO) as it influences how search engines rank pages in search results.",
            },
        ],
    },
    Category {
        name: "CSS",
        tips: &[
            Tip {
                title: "Use line breaks liberally",
                description: "Using line breaks improves readability and makes the code easier to understand and maintain.",
            },
            Tip {
                title: "Use separate stylesheets for larger projects",
                description: "For large websites, using multiple stylesheets helps organize styles for different sections, making the code easier to manage.",
            },
            Tip {
                title: "Consider using a CSS framework",
                description: "CSS frameworks can speed up development for large projects, reduce bugs, and provide standardization, especially in team environments.",
            },
            Tip {
                title: "Start with a CSS reset",
                description: "A CSS reset ensures consistent rendering across browsers and minimizes inconsistencies.",
            },
            Tip {
                title: "Use CSS shorthand",
                description: "CSS shorthand reduces code size by combining multiple styles into a single line, improving readability and efficiency.",
            },
        ],
    },
    Category {
        name: "JavaScript",
        tips: &[
            Tip {
                title: "Avoid Using eval()",
                description: "The eval() function is used to run text as code. In almost all cases, it should not be necessary to use it.<br/>Because it allows arbitrary code to be run, it also represents a security problem.",
            },
            Tip {
                title: "Use === for comparison",
                description: "The strict equality operator (===) checks both the data type and value, making it the best practice for comparisons.",
            },
            Tip {
                title: "Beware of Automatic Type Conversions",
                description: "Beware that numbers can accidentally be converted to strings or NaN (Not a Number).<br/>Subtracting a string from a string, does not generate an error but returns NaN (Not a Number)",
            },
            Tip {
                title: "Declare Arrays with const",
                description: "Declaring arrays with const will prevent any accidential change of type.",
            },
            Tip {
                title: "Avoid global variables",
                description: "Global variables can lead to conflicts and make the code harder to maintain and debug.<br/>Limit their use whenever possible.",
            },
        ],
    },
];

/// All tip ids in catalog order.
pub fn all_tip_ids() -> Vec<String> {
    CATALOG
        .iter()
        .flat_map(|category| category.tips.iter().map(|tip| tip_id(tip.title)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn tip_id_lowercases_and_hyphenates() {
        assert_eq!(tip_id("Use lowercase element names"), "use-lowercase-element-names");
        assert_eq!(tip_id("Use === for comparison"), "use-===-for-comparison");
        assert_eq!(tip_id("Avoid  Using\teval()"), "avoid-using-eval()");
    }

    #[test]
    fn tip_id_is_stable() {
        for category in CATALOG {
            for tip in category.tips {
                assert_eq!(tip_id(tip.title), tip_id(tip.title));
            }
        }
    }

    #[test]
    fn catalog_ids_are_unique() {
        let ids = all_tip_ids();
        let unique: BTreeSet<_> = ids.iter().collect();
        assert_eq!(unique.len(), ids.len());
    }

    #[test]
    fn catalog_has_three_categories_of_five() {
        assert_eq!(CATALOG.len(), 3);
        for category in CATALOG {
            assert_eq!(category.tips.len(), 5, "category {}", category.name);
        }
        assert_eq!(all_tip_ids().len(), 15);
    }
}
