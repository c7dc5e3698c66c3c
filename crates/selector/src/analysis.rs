//! Project analysis: classify a file list and summarize its signals.

use crate::features;
use deploypick_schema::{ProjectAnalysis, ProjectFile, ProjectType};
use tracing::debug;

/// A file with its name, base name and content lowercased once up front.
#[derive(Debug)]
pub(crate) struct IndexedFile {
    pub name: String,
    pub base: String,
    pub content: Option<String>,
}

impl IndexedFile {
    fn new(file: &ProjectFile) -> Self {
        let name = file.name.to_lowercase();
        let base = name
            .rsplit(['/', '\\'])
            .next()
            .unwrap_or(name.as_str())
            .to_string();
        Self {
            base,
            content: file.content.as_ref().map(|c| c.to_lowercase()),
            name,
        }
    }

    pub fn has_extension(&self, ext: &str) -> bool {
        self.base
            .strip_suffix(ext)
            .is_some_and(|stem| stem.ends_with('.'))
    }

    pub fn content_contains(&self, needle: &str) -> bool {
        self.content.as_deref().is_some_and(|c| c.contains(needle))
    }
}

/// Lowercased view over a project's files.
#[derive(Debug)]
pub(crate) struct FileIndex {
    files: Vec<IndexedFile>,
}

impl FileIndex {
    pub fn new(files: &[ProjectFile]) -> Self {
        Self {
            files: files.iter().map(IndexedFile::new).collect(),
        }
    }

    /// A file whose base name equals `name`.
    pub fn has_file(&self, name: &str) -> bool {
        self.files.iter().any(|f| f.base == name)
    }

    pub fn any_base_starts_with(&self, prefix: &str) -> bool {
        self.files.iter().any(|f| f.base.starts_with(prefix))
    }

    pub fn any_name_contains(&self, needle: &str) -> bool {
        self.files.iter().any(|f| f.name.contains(needle))
    }

    pub fn any_extension(&self, ext: &str) -> bool {
        self.files.iter().any(|f| f.has_extension(ext))
    }

    pub fn any_content_contains(&self, needle: &str) -> bool {
        self.files.iter().any(|f| f.content_contains(needle))
    }

    pub fn iter(&self) -> impl Iterator<Item = &IndexedFile> {
        self.files.iter()
    }
}

/// Classify the project. The first matching rule wins.
pub(crate) fn detect_project_type(index: &FileIndex) -> ProjectType {
    if index.has_file("package.json") {
        if index.any_base_starts_with("next.config.") {
            ProjectType::Nextjs
        } else if index.any_base_starts_with("vite.config.") {
            ProjectType::Vite
        } else if index.any_name_contains("react") {
            ProjectType::React
        } else {
            ProjectType::Nodejs
        }
    } else if index.has_file("requirements.txt") || index.any_extension("py") {
        ProjectType::Python
    } else if index.has_file("composer.json") || index.any_extension("php") {
        ProjectType::Php
    } else if index.has_file("gemfile") || index.any_extension("rb") {
        ProjectType::Ruby
    } else if index.has_file("index.html") {
        ProjectType::Static
    } else {
        ProjectType::Unknown
    }
}

/// Analyze a list of project files.
///
/// Never fails: unrecognized input yields `ProjectType::Unknown` and all
/// flags false. File contents are optional and only searched when present.
pub fn analyze(files: &[ProjectFile]) -> ProjectAnalysis {
    let index = FileIndex::new(files);

    let project_type = detect_project_type(&index);
    let dependencies = features::detect_dependencies(&index);
    let build_requirements = features::detect_build_requirements(&index, project_type);
    let special_features = features::detect_special_features(&index, project_type, &dependencies);

    let file_size_bytes = files
        .iter()
        .fold(0u64, |total, f| total.saturating_add(f.size));

    debug!(
        "Analyzed {} files: type={}, size={} bytes",
        files.len(),
        project_type,
        file_size_bytes
    );

    ProjectAnalysis {
        project_type,
        file_size_bytes,
        file_count: files.len(),
        dependencies,
        build_requirements,
        special_features,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use deploypick_schema::{BuildRequirements, Dependencies, SpecialFeatures};
    use pretty_assertions::assert_eq;

    fn files(names: &[&str]) -> Vec<ProjectFile> {
        names.iter().map(|n| ProjectFile::new(*n, 100)).collect()
    }

    fn project_type(names: &[&str]) -> ProjectType {
        analyze(&files(names)).project_type
    }

    #[test]
    fn test_nextjs_scenario() {
        let files = vec![
            ProjectFile::new("package.json", 1000),
            ProjectFile::new("next.config.js", 200),
            ProjectFile::new("index.js", 5000),
        ];
        let analysis = analyze(&files);
        assert_eq!(analysis.project_type, ProjectType::Nextjs);
        assert_eq!(analysis.file_size_bytes, 6200);
        assert_eq!(analysis.file_count, 3);
        assert!(analysis.dependencies.node);
        assert!(analysis.build_requirements.build_step);
        assert!(analysis.special_features.ssr);
    }

    #[test]
    fn test_requirements_txt_is_python() {
        let analysis = analyze(&[ProjectFile::new("requirements.txt", 500)]);
        assert_eq!(analysis.project_type, ProjectType::Python);
        assert_eq!(analysis.file_size_bytes, 500);
        assert!(analysis.dependencies.python);
    }

    #[test]
    fn test_empty_list_is_unknown() {
        let analysis = analyze(&[]);
        assert_eq!(analysis, ProjectAnalysis::default());
        assert_eq!(analysis.project_type, ProjectType::Unknown);
    }

    #[test]
    fn test_unrecognized_files_have_no_signals() {
        let analysis = analyze(&files(&["notes.txt", "photo.png", "LICENSE"]));
        assert_eq!(analysis.project_type, ProjectType::Unknown);
        assert_eq!(analysis.dependencies, Dependencies::default());
        assert_eq!(analysis.build_requirements, BuildRequirements::default());
        assert_eq!(analysis.special_features, SpecialFeatures::default());
        assert_eq!(analysis.file_size_bytes, 300);
    }

    #[test]
    fn test_package_json_rules_in_order() {
        assert_eq!(
            project_type(&["package.json", "vite.config.ts", "next.config.mjs"]),
            ProjectType::Nextjs
        );
        assert_eq!(
            project_type(&["package.json", "vite.config.ts", "src/react-app.tsx"]),
            ProjectType::Vite
        );
        assert_eq!(
            project_type(&["package.json", "src/ReactComponent.jsx"]),
            ProjectType::React
        );
        assert_eq!(project_type(&["package.json", "server.js"]), ProjectType::Nodejs);
    }

    #[test]
    fn test_package_json_wins_over_other_languages() {
        assert_eq!(
            project_type(&["package.json", "requirements.txt", "index.html"]),
            ProjectType::Nodejs
        );
    }

    #[test]
    fn test_non_node_rules_in_order() {
        assert_eq!(project_type(&["app.py", "composer.json"]), ProjectType::Python);
        assert_eq!(project_type(&["index.php", "Gemfile"]), ProjectType::Php);
        assert_eq!(project_type(&["Gemfile", "index.html"]), ProjectType::Ruby);
        assert_eq!(project_type(&["config.ru", "app.rb"]), ProjectType::Ruby);
        assert_eq!(project_type(&["index.html", "style.css"]), ProjectType::Static);
    }

    #[test]
    fn test_matching_is_case_insensitive_and_path_aware() {
        assert_eq!(
            project_type(&["web/Package.JSON", "web/Next.Config.js"]),
            ProjectType::Nextjs
        );
        assert_eq!(project_type(&["public\\INDEX.HTML"]), ProjectType::Static);
    }

    #[test]
    fn test_extension_requires_dot() {
        // "happy" ends with "py" but has no .py extension
        assert_eq!(project_type(&["happy"]), ProjectType::Unknown);
        assert_eq!(project_type(&["scripts/build.py"]), ProjectType::Python);
    }

    #[test]
    fn test_size_sums_all_files() {
        let files = vec![
            ProjectFile::new("a", 1),
            ProjectFile::new("b", 20),
            ProjectFile::new("c", 300),
        ];
        assert_eq!(analyze(&files).file_size_bytes, 321);
    }

    #[test]
    fn test_size_saturates() {
        let files = vec![ProjectFile::new("a", u64::MAX), ProjectFile::new("b", 10)];
        assert_eq!(analyze(&files).file_size_bytes, u64::MAX);
    }

    #[test]
    fn test_analyze_is_idempotent() {
        let files = vec![
            ProjectFile::with_content("src/App.jsx", 900, "ReactDOM.createRoot(el)"),
            ProjectFile::new("package.json", 400),
            ProjectFile::new("api/users.js", 300),
        ];
        assert_eq!(analyze(&files), analyze(&files));
    }
}
