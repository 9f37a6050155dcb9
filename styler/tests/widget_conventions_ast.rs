use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use syn::{Item, UseTree, Visibility};

const REQUIRED_WIDGET_FILES: [&str; 3] = ["mod.rs", "command.rs", "state.rs"];

#[test]
fn given_widgets_when_validating_conventions_then_all_modules_comply() {
    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let widgets_dir = manifest_dir.join("src/widgets");

    let mut violations: Vec<String> = Vec::new();

    let declared =
        declared_modules(&widgets_dir.join("mod.rs"), &mut violations);
    let on_disk = child_dirs(&widgets_dir);
    if declared != on_disk {
        violations.push(format!(
            "{}: declared widgets {declared:?} do not match directories {on_disk:?}",
            widgets_dir.display()
        ));
    }

    for widget in &declared {
        validate_widget_dir(&widgets_dir.join(widget), &mut violations);
    }

    assert!(
        violations.is_empty(),
        "widget convention violations:\n{}",
        violations.join("\n")
    );
}

fn validate_widget_dir(widget_dir: &Path, violations: &mut Vec<String>) {
    for required in REQUIRED_WIDGET_FILES {
        if !widget_dir.join(required).is_file() {
            violations.push(format!(
                "{}: widget is missing {required}",
                widget_dir.display()
            ));
        }
    }

    let view_dir = widget_dir.join("view");
    if !view_dir.is_dir() {
        violations.push(format!(
            "{}: widget is missing a view/ directory",
            widget_dir.display()
        ));
        return;
    }

    let mod_file = parse(&widget_dir.join("mod.rs"));
    for item in &mod_file.items {
        if let Item::Use(item_use) = item {
            if use_tree_has_glob(&item_use.tree) {
                violations.push(format!(
                    "{}: wildcard use/import is forbidden",
                    widget_dir.join("mod.rs").display()
                ));
            }
        }
    }

    let declared = declared_modules(&view_dir.join("mod.rs"), violations);
    let on_disk = child_rs_files(&view_dir);
    if declared != on_disk {
        violations.push(format!(
            "{}: declared views {declared:?} do not match files {on_disk:?}",
            view_dir.display()
        ));
    }

    for module in &declared {
        validate_view_file(&view_dir.join(format!("{module}.rs")), violations);
    }
}

fn validate_view_file(file_path: &Path, violations: &mut Vec<String>) {
    let source = fs::read_to_string(file_path).unwrap_or_else(|err| {
        panic!("failed to read {}: {err}", file_path.display())
    });
    let file = syn::parse_file(&source).unwrap_or_else(|err| {
        panic!("failed to parse {}: {err}", file_path.display())
    });
    let expected_prefix = file_stem_pascal_case(file_path);

    for forbidden in ["crate::app::AppEvent", "crate::state::", "crate::routers"]
    {
        if contains_path(&source, forbidden) {
            violations.push(format!(
                "{}: views must not depend on {forbidden}",
                file_path.display()
            ));
        }
    }

    for forbidden in ["log::", "Task::", "iced::Task", "std::fs::"] {
        if contains_path(&source, forbidden) {
            violations.push(format!(
                "{}: forbidden side-effect pattern detected: {forbidden}",
                file_path.display()
            ));
        }
    }

    let mut view_count = 0usize;
    let mut props_names: Vec<String> = Vec::new();

    for item in &file.items {
        match item {
            Item::Fn(item_fn) if item_fn.sig.ident == "view" => {
                if is_pub_crate(&item_fn.vis) {
                    view_count += 1;
                } else {
                    violations.push(format!(
                        "{}: view must be pub(crate)",
                        file_path.display()
                    ));
                }
            },
            Item::Struct(item_struct) => {
                let name = item_struct.ident.to_string();
                if name.ends_with("Props") {
                    props_names.push(name);
                }
            },
            Item::Enum(item_enum) => {
                let name = item_enum.ident.to_string();
                if name.ends_with("Event") || name.ends_with("Effect") {
                    violations.push(format!(
                        "{}: '{name}' belongs in the widget event.rs",
                        file_path.display()
                    ));
                }
            },
            Item::Use(item_use) => {
                if use_tree_has_glob(&item_use.tree) {
                    violations.push(format!(
                        "{}: wildcard use/import is forbidden",
                        file_path.display()
                    ));
                }
            },
            _ => {},
        }
    }

    if view_count != 1 {
        violations.push(format!(
            "{}: expected exactly one pub(crate) fn view, found {view_count}",
            file_path.display()
        ));
    }

    if props_names.len() != 1 {
        violations.push(format!(
            "{}: expected exactly one *Props type, found {}",
            file_path.display(),
            props_names.len()
        ));
    }

    for name in props_names {
        if name != format!("{expected_prefix}Props") {
            violations.push(format!(
                "{}: props type '{name}' must be named '{expected_prefix}Props'",
                file_path.display()
            ));
        }
    }
}

/// Return whether `path` occurs in `source` as a whole path, so `log::`
/// matches `log::debug!` but not `catalog::`.
fn contains_path(source: &str, path: &str) -> bool {
    source.match_indices(path).any(|(start, _)| {
        source[..start]
            .chars()
            .next_back()
            .is_none_or(|prev| !(prev.is_alphanumeric() || prev == '_'))
    })
}

fn declared_modules(
    mod_rs: &Path,
    violations: &mut Vec<String>,
) -> BTreeSet<String> {
    let mod_file = parse(mod_rs);
    let mut declared = BTreeSet::new();

    for item in &mod_file.items {
        match item {
            Item::Mod(item_mod) => {
                if is_pub_crate(&item_mod.vis) && item_mod.content.is_none() {
                    declared.insert(item_mod.ident.to_string());
                } else {
                    violations.push(format!(
                        "{}: module declaration '{}' must be pub(crate) mod <name>;",
                        mod_rs.display(),
                        item_mod.ident
                    ));
                }
            },
            Item::Use(item_use) if use_tree_has_glob(&item_use.tree) => {
                violations.push(format!(
                    "{}: wildcard use/import is forbidden",
                    mod_rs.display()
                ));
            },
            _ => {},
        }
    }

    declared
}

fn parse(file_path: &Path) -> syn::File {
    let source = fs::read_to_string(file_path).unwrap_or_else(|err| {
        panic!("failed to read {}: {err}", file_path.display())
    });
    syn::parse_file(&source).unwrap_or_else(|err| {
        panic!("failed to parse {}: {err}", file_path.display())
    })
}

fn child_dirs(dir: &Path) -> BTreeSet<String> {
    read_dir(dir)
        .into_iter()
        .filter(|path| path.is_dir())
        .map(|path| file_stem(&path))
        .collect()
}

fn child_rs_files(dir: &Path) -> BTreeSet<String> {
    read_dir(dir)
        .into_iter()
        .filter(|path| path.is_file())
        .filter(|path| path.extension().is_some_and(|ext| ext == "rs"))
        .map(|path| file_stem(&path))
        .filter(|stem| stem != "mod")
        .collect()
}

fn read_dir(dir: &Path) -> Vec<PathBuf> {
    let entries = fs::read_dir(dir).unwrap_or_else(|err| {
        panic!("failed to read dir {}: {err}", dir.display())
    });
    entries
        .map(|entry| {
            entry
                .unwrap_or_else(|err| panic!("failed to read dir entry: {err}"))
                .path()
        })
        .collect()
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .unwrap_or_else(|| panic!("missing stem for {}", path.display()))
        .to_string_lossy()
        .to_string()
}

fn file_stem_pascal_case(file_path: &Path) -> String {
    snake_to_pascal_case(&file_stem(file_path))
}

fn snake_to_pascal_case(value: &str) -> String {
    value
        .split('_')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            let Some(first) = chars.next() else {
                return String::new();
            };
            let mut pascal = String::new();
            pascal.extend(first.to_uppercase());
            pascal.push_str(chars.as_str());
            pascal
        })
        .collect::<String>()
}

fn use_tree_has_glob(tree: &UseTree) -> bool {
    match tree {
        UseTree::Glob(_) => true,
        UseTree::Group(group) => group.items.iter().any(use_tree_has_glob),
        UseTree::Path(path) => use_tree_has_glob(&path.tree),
        UseTree::Name(_) | UseTree::Rename(_) => false,
    }
}

fn is_pub_crate(vis: &Visibility) -> bool {
    match vis {
        Visibility::Restricted(restricted) => {
            restricted.in_token.is_none() && restricted.path.is_ident("crate")
        },
        _ => false,
    }
}

#[test]
fn given_module_ending_in_log_when_scanning_then_not_a_log_call() {
    let source = "use crate::shared::catalog::{CATALOG, Dimension};";

    assert!(!contains_path(source, "log::"));
}

#[test]
fn given_log_macro_when_scanning_then_detected() {
    assert!(contains_path("log::debug!(\"x\");", "log::"));
    assert!(contains_path("fn f() { log::warn!(\"x\"); }", "log::"));
    assert!(contains_path("let t = iced::Task::none();", "Task::"));
    assert!(!contains_path("let t = MyTask::none();", "Task::"));
}
