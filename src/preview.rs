use crate::fileset::FileSet;
use colored::Colorize;
use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt::Write;
use std::path::{Path, PathBuf};
use std::rc::Rc;

/// Represents a node in the tree (either file or directory).
#[derive(Debug)]
struct TreeNode {
    name: String,
    children: Vec<Rc<RefCell<TreeNode>>>,
    is_file: bool,
}
impl TreeNode {
    fn new(name: String, is_file: bool) -> Self {
        Self {
            name,
            children: Vec::new(),
            is_file,
        }
    }
}

/// Build the directory tree from the file set, returning the root node.
///
/// A [`FileSet`] only holds files, so intermediate directories are created on first sight.
fn build_tree(files: &FileSet, destination: &Path) -> Rc<RefCell<TreeNode>> {
    let root_name = destination
        .file_name()
        .map(|os| os.to_string_lossy().to_string())
        .unwrap_or_else(|| destination.display().to_string());

    let root = Rc::new(RefCell::new(TreeNode::new(root_name, false)));

    // map relative path to node; the root is the empty path
    let mut lookup: HashMap<PathBuf, Rc<RefCell<TreeNode>>> = HashMap::new();
    lookup.insert(PathBuf::new(), Rc::clone(&root));

    for spec in files.iter() {
        let mut parent = Rc::clone(&root);
        let mut current = PathBuf::new();
        let segments: Vec<_> = spec.path.components().collect();

        for (i, segment) in segments.iter().enumerate() {
            current.push(segment);
            let is_file = i == segments.len() - 1;

            let node = match lookup.get(&current) {
                Some(node) => Rc::clone(node),
                None => {
                    let name = segment.as_os_str().to_string_lossy().to_string();
                    let new_child = Rc::new(RefCell::new(TreeNode::new(name, is_file)));

                    parent.borrow_mut().children.push(Rc::clone(&new_child));
                    lookup.insert(current.clone(), Rc::clone(&new_child));

                    new_child
                }
            };

            parent = node;
        }
    }

    root
}

/// Render the tree with a nice ASCII style.
fn print_tree(out: &mut String, node: &Rc<RefCell<TreeNode>>, prefix: &str, is_last: bool) {
    let node_borrow = node.borrow();

    let connector = if is_last {
        "└── ".yellow()
    } else {
        "├── ".yellow()
    };
    let name = if node_borrow.is_file {
        node_borrow.name.green()
    } else {
        node_borrow.name.blue()
    };
    let _ = writeln!(out, "{}{}{}", prefix.yellow(), connector, name);

    let child_prefix = if is_last {
        format!("{}    ", prefix)
    } else {
        format!("{}│   ", prefix)
    };

    let len = node_borrow.children.len();
    for (i, child) in node_borrow.children.iter().enumerate() {
        let last = i == len - 1;
        print_tree(out, child, &child_prefix, last);
    }
}

fn render_tree(files: &FileSet, destination: &Path) -> String {
    let tree_root = build_tree(files, destination);

    let mut out = String::new();
    print_tree(&mut out, &tree_root, "", true);

    out
}

pub fn preview_as_tree(files: &FileSet, destination: &Path) {
    println!(
        "Legend: {} = (directory), {} = (file)",
        "blue".blue(),
        "green".green()
    );

    let fancy_prompt = format!(
        "{} {}\n",
        "┌─".bold().bright_blue(),
        "Preview".bold().bright_blue(),
    );

    println!("{}", fancy_prompt);

    print!("{}", render_tree(files, destination));

    println!("\n{} {} files", "└─".bold().bright_blue(), files.len());
}
