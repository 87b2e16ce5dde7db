//! Procedural macros for tui-select

use darling::{FromDeriveInput, FromVariant};
use proc_macro::TokenStream;
use proc_macro2::Ident;
use quote::{format_ident, quote};
use std::collections::BTreeMap;
use syn::{parse_macro_input, DeriveInput};

/// Container-level attributes for #[derive(Action)]
#[derive(Debug, FromDeriveInput)]
#[darling(attributes(action), supports(enum_any))]
struct ActionOpts {
    ident: syn::Ident,
    data: darling::ast::Data<ActionVariant, ()>,

    /// Enable automatic category inference from variant name prefixes
    #[darling(default)]
    infer_categories: bool,
}

/// Variant-level attributes
#[derive(Debug, FromVariant)]
#[darling(attributes(action))]
struct ActionVariant {
    ident: syn::Ident,
    fields: darling::ast::Fields<()>,

    /// Explicit category override
    #[darling(default)]
    category: Option<String>,

    /// Exclude from category inference
    #[darling(default)]
    skip_category: bool,
}

// Verbs that END an action name. Nouns like "Form" or "Options" must not be here.
const ACTION_VERBS: &[&str] = &[
    // State transitions
    "Open", "Close", "Toggle", "Submit", "Confirm", "Cancel", "Reset", // Navigation
    "Next", "Prev", "Up", "Down", "Enter", "Exit", "Escape", // Data
    "Fetch", "Load", "Clear", "Update", "Set", "Select", "Commit", // Focus
    "Focus", "Blur", // Terminal
    "Resize",
];

/// Split a PascalCase string into parts
fn split_pascal_case(s: &str) -> Vec<String> {
    let mut parts = Vec::new();
    let mut current = String::new();

    for ch in s.chars() {
        if ch.is_uppercase() && !current.is_empty() {
            parts.push(std::mem::take(&mut current));
        }
        current.push(ch);
    }
    if !current.is_empty() {
        parts.push(current);
    }
    parts
}

/// Convert PascalCase to snake_case
fn to_snake_case(s: &str) -> String {
    split_pascal_case(s)
        .iter()
        .map(|part| part.to_lowercase())
        .collect::<Vec<_>>()
        .join("_")
}

/// Convert snake_case to PascalCase
fn to_pascal_case(s: &str) -> String {
    s.split('_')
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                None => String::new(),
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
            }
        })
        .collect()
}

/// Infer category from a variant name using naming patterns
///
/// The category is the prefix before the first verb or before a `Did`
/// marker: `OptionsFetch` and `OptionsDidLoad` are both `options`,
/// `FormFocusNext` is `form`. A leading verb (`OpenMenu`) or a name without
/// any verb (`Quit`) stays uncategorized; a leading `Did` is `async_result`.
fn infer_category(name: &str) -> Option<String> {
    let parts = split_pascal_case(name);
    let first = parts.first()?;

    if first == "Did" {
        return Some("async_result".to_string());
    }

    if parts.len() < 2 || ACTION_VERBS.contains(&first.as_str()) {
        return None;
    }

    let prefix_end = parts
        .iter()
        .skip(1)
        .position(|part| part == "Did" || ACTION_VERBS.contains(&part.as_str()))?
        + 1;

    Some(to_snake_case(&parts[..prefix_end].concat()))
}

/// Derive macro for the Action trait
///
/// Generates a `name()` method that returns the variant name as a static string.
///
/// With `#[action(infer_categories)]`, also generates:
/// - `category() -> Option<&'static str>` - Get action's category
/// - `category_enum() -> {Name}Category` - Get category as enum
/// - `is_{category}()` predicates for each category
/// - `{Name}Category` enum with all discovered categories
/// - an `ActionCategory` impl
///
/// Variants accept `#[action(category = "...")]` and `#[action(skip_category)]`.
///
/// # Example
/// ```ignore
/// #[derive(Action, Clone, Debug)]
/// #[action(infer_categories)]
/// enum FormAction {
///     OptionsFetch,
///     OptionsDidLoad(OptionList),
///     FormSubmit(String),
///     Quit,  // uncategorized
/// }
///
/// let action = FormAction::OptionsFetch;
/// assert_eq!(action.name(), "OptionsFetch");
/// assert_eq!(action.category(), Some("options"));
/// assert!(action.is_options());
/// ```
#[proc_macro_derive(Action, attributes(action))]
pub fn derive_action(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let opts = match ActionOpts::from_derive_input(&input) {
        Ok(opts) => opts,
        Err(e) => return e.write_errors().into(),
    };

    let name = &opts.ident;

    let variants = match &opts.data {
        darling::ast::Data::Enum(variants) => variants,
        _ => {
            return syn::Error::new_spanned(&input, "Action can only be derived for enums")
                .to_compile_error()
                .into();
        }
    };

    let name_arms = variants.iter().map(|v| {
        let variant_name = &v.ident;
        let variant_str = variant_name.to_string();

        match &v.fields.style {
            darling::ast::Style::Unit => quote! {
                #name::#variant_name => #variant_str
            },
            darling::ast::Style::Tuple => quote! {
                #name::#variant_name(..) => #variant_str
            },
            darling::ast::Style::Struct => quote! {
                #name::#variant_name { .. } => #variant_str
            },
        }
    });

    let mut expanded = quote! {
        impl tui_select::Action for #name {
            fn name(&self) -> &'static str {
                match self {
                    #(#name_arms),*
                }
            }
        }
    };

    if opts.infer_categories {
        // BTreeMap keeps the generated enum order deterministic
        let mut categories: BTreeMap<String, Vec<&Ident>> = BTreeMap::new();
        let mut variant_categories: Vec<(&Ident, Option<String>)> = Vec::new();

        for v in variants.iter() {
            let cat = if v.skip_category {
                None
            } else if let Some(explicit_cat) = &v.category {
                Some(explicit_cat.clone())
            } else {
                infer_category(&v.ident.to_string())
            };

            if let Some(category) = &cat {
                categories.entry(category.clone()).or_default().push(&v.ident);
            }
            variant_categories.push((&v.ident, cat));
        }

        let category_enum_name = format_ident!("{}Category", name);
        let category_variant_names: Vec<_> = categories.keys().cloned().collect();
        let category_variants: Vec<_> = category_variant_names
            .iter()
            .map(|c| format_ident!("{}", to_pascal_case(c)))
            .collect();

        let category_arms: Vec<_> = variant_categories
            .iter()
            .map(|(variant, cat)| {
                let cat_expr = match cat {
                    Some(c) => quote! { ::core::option::Option::Some(#c) },
                    None => quote! { ::core::option::Option::None },
                };
                quote! { #name::#variant { .. } => #cat_expr }
            })
            .collect();

        let category_enum_arms: Vec<_> = variant_categories
            .iter()
            .map(|(variant, cat)| {
                let cat_variant = match cat {
                    Some(c) => format_ident!("{}", to_pascal_case(c)),
                    None => format_ident!("Uncategorized"),
                };
                quote! { #name::#variant { .. } => #category_enum_name::#cat_variant }
            })
            .collect();

        let predicates: Vec<_> = categories
            .iter()
            .map(|(cat, members)| {
                let predicate_name = format_ident!("is_{}", cat);
                let doc = format!(
                    "Returns true if this action belongs to the `{}` category.",
                    cat
                );
                quote! {
                    #[doc = #doc]
                    pub fn #predicate_name(&self) -> bool {
                        matches!(self, #(#name::#members { .. })|*)
                    }
                }
            })
            .collect();

        let category_enum_doc = format!(
            "Action categories for [`{}`].\n\n\
             Use [`{}::category_enum()`] to get the category of an action.",
            name, name
        );

        expanded = quote! {
            #expanded

            #[doc = #category_enum_doc]
            #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
            pub enum #category_enum_name {
                #(#category_variants,)*
                /// Actions that don't belong to any specific category.
                Uncategorized,
            }

            impl #category_enum_name {
                /// Get all category values
                pub fn all() -> &'static [Self] {
                    &[#(Self::#category_variants,)* Self::Uncategorized]
                }

                /// Get category name as string
                pub fn name(&self) -> &'static str {
                    match self {
                        #(Self::#category_variants => #category_variant_names,)*
                        Self::Uncategorized => "uncategorized",
                    }
                }
            }

            impl #name {
                /// Get the action's category (if categorized)
                pub fn category(&self) -> ::core::option::Option<&'static str> {
                    match self {
                        #(#category_arms,)*
                    }
                }

                /// Get the category as an enum value
                pub fn category_enum(&self) -> #category_enum_name {
                    match self {
                        #(#category_enum_arms,)*
                    }
                }

                #(#predicates)*
            }

            impl tui_select::ActionCategory for #name {
                type Category = #category_enum_name;

                fn category(&self) -> ::core::option::Option<&'static str> {
                    #name::category(self)
                }

                fn category_enum(&self) -> Self::Category {
                    #name::category_enum(self)
                }
            }
        };
    }

    TokenStream::from(expanded)
}

/// Derive macro for the BindingAction trait
///
/// Generates `name()`, `from_name()` and `all()`. Names are the variant
/// names in snake_case, which is also the key used in keybinding files.
///
/// # Example
/// ```ignore
/// #[derive(BindingAction, Clone, Copy, PartialEq, Eq, Hash, Debug)]
/// enum FormKey {
///     FocusNext,
///     Submit,
/// }
///
/// assert_eq!(FormKey::FocusNext.name(), "focus_next");
/// assert_eq!(FormKey::from_name("submit"), Some(FormKey::Submit));
/// ```
#[proc_macro_derive(BindingAction)]
pub fn derive_binding_action(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let name = &input.ident;

    let data = match &input.data {
        syn::Data::Enum(data) => data,
        _ => {
            return syn::Error::new_spanned(&input, "BindingAction can only be derived for enums")
                .to_compile_error()
                .into();
        }
    };

    if let Some(variant) = data
        .variants
        .iter()
        .find(|v| !matches!(v.fields, syn::Fields::Unit))
    {
        return syn::Error::new_spanned(
            variant,
            "BindingAction can only be derived for enums with unit variants",
        )
        .to_compile_error()
        .into();
    }

    let variant_names: Vec<_> = data.variants.iter().map(|v| &v.ident).collect();
    let variant_strings: Vec<_> = variant_names
        .iter()
        .map(|v| to_snake_case(&v.to_string()))
        .collect();

    let expanded = quote! {
        impl tui_select::BindingAction for #name {
            fn name(&self) -> &'static str {
                match self {
                    #(#name::#variant_names => #variant_strings,)*
                }
            }

            fn from_name(name: &str) -> ::core::option::Option<Self> {
                match name {
                    #(#variant_strings => ::core::option::Option::Some(#name::#variant_names),)*
                    _ => ::core::option::Option::None,
                }
            }

            fn all() -> &'static [Self] {
                &[#(#name::#variant_names),*]
            }
        }
    };

    TokenStream::from(expanded)
}
