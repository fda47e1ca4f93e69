/// Photo gallery listing
use crate::domain::Shoot;
use crate::errors::ApiResult;
use std::fs;
use std::path::Path;

/// Enumerate photo shoots under `root`.
///
/// A shoot is an immediate subdirectory holding both a `thumbs/` and a
/// `fullsize/` subdirectory; each thumb links to the same-named file
/// under `fullsize/`. Entries are sorted by name so the page renders
/// deterministically. A missing root yields an empty listing.
pub fn list_shoots(root: &Path) -> ApiResult<Vec<Shoot>> {
    let mut shoots = Vec::new();
    if !root.is_dir() {
        return Ok(shoots);
    }

    let mut dirs: Vec<_> = fs::read_dir(root)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_dir())
        .collect();
    dirs.sort();

    for dir in dirs {
        let thumbs = dir.join("thumbs");
        let fullsize = dir.join("fullsize");
        if !thumbs.is_dir() || !fullsize.is_dir() {
            continue;
        }

        let mut names: Vec<String> = fs::read_dir(&thumbs)?
            .filter_map(|entry| entry.ok())
            .filter_map(|entry| entry.file_name().into_string().ok())
            .collect();
        names.sort();

        let mut markup = String::from("<div class=\"photo-gallery\">");
        for name in &names {
            let fspath = fullsize.join(name);
            let tpath = thumbs.join(name);
            markup.push_str(&format!(
                "<a href=\"{}\"><img src=\"{}\"></a>",
                fspath.display(),
                tpath.display()
            ));
        }
        markup.push_str("</div>");

        let name = dir
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        shoots.push(Shoot { name, markup });
    }

    Ok(shoots)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    struct TempTree {
        root: PathBuf,
    }

    impl TempTree {
        fn new(label: &str) -> Self {
            let root = std::env::temp_dir().join(format!(
                "night_sky_gallery_{label}_{}",
                std::process::id()
            ));
            let _ = fs::remove_dir_all(&root);
            fs::create_dir_all(&root).expect("create temp root");
            Self { root }
        }
    }

    impl Drop for TempTree {
        fn drop(&mut self) {
            let _ = fs::remove_dir_all(&self.root);
        }
    }

    fn add_shoot(root: &Path, shoot: &str, photos: &[&str]) {
        let thumbs = root.join(shoot).join("thumbs");
        let fullsize = root.join(shoot).join("fullsize");
        fs::create_dir_all(&thumbs).expect("create thumbs");
        fs::create_dir_all(&fullsize).expect("create fullsize");
        for photo in photos {
            fs::write(thumbs.join(photo), b"thumb").expect("write thumb");
            fs::write(fullsize.join(photo), b"full").expect("write fullsize");
        }
    }

    #[test]
    fn test_missing_root_yields_empty_listing() {
        let shoots = list_shoots(Path::new("/nonexistent/night_sky_photos")).expect("list");
        assert!(shoots.is_empty());
    }

    #[test]
    fn test_shoot_markup_links_thumb_to_fullsize() {
        let tree = TempTree::new("markup");
        add_shoot(&tree.root, "eclipse", &["01.jpg"]);

        let shoots = list_shoots(&tree.root).expect("list");
        assert_eq!(shoots.len(), 1);
        assert_eq!(shoots[0].name, "eclipse");

        let fspath = tree.root.join("eclipse/fullsize/01.jpg");
        let tpath = tree.root.join("eclipse/thumbs/01.jpg");
        assert_eq!(
            shoots[0].markup,
            format!(
                "<div class=\"photo-gallery\"><a href=\"{}\"><img src=\"{}\"></a></div>",
                fspath.display(),
                tpath.display()
            )
        );
    }

    #[test]
    fn test_directories_without_both_subdirs_are_skipped() {
        let tree = TempTree::new("skip");
        add_shoot(&tree.root, "complete", &["a.jpg"]);
        fs::create_dir_all(tree.root.join("thumbs_only/thumbs")).expect("create");
        fs::create_dir_all(tree.root.join("empty_dir")).expect("create");

        let shoots = list_shoots(&tree.root).expect("list");
        let names: Vec<_> = shoots.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["complete"]);
    }

    #[test]
    fn test_shoots_and_photos_are_sorted_by_name() {
        let tree = TempTree::new("sorted");
        add_shoot(&tree.root, "zenith", &["b.jpg", "a.jpg"]);
        add_shoot(&tree.root, "aurora", &["x.jpg"]);

        let shoots = list_shoots(&tree.root).expect("list");
        let names: Vec<_> = shoots.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["aurora", "zenith"]);

        let zenith = &shoots[1].markup;
        let a = zenith.find("a.jpg").expect("a.jpg in markup");
        let b = zenith.find("b.jpg").expect("b.jpg in markup");
        assert!(a < b);
    }
}
