//! Dependency, build and runtime feature detection.
//!
//! All checks are substring or exact matches over lowercased names and,
//! where noted, optional file content. Nothing is parsed.

use crate::analysis::FileIndex;
use deploypick_schema::{BuildRequirements, Dependencies, ProjectType, SpecialFeatures};

const DATABASE_NAME_HINTS: &[&str] = &["database", "prisma", "migration", "schema.sql"];
const DATABASE_EXTENSIONS: &[&str] = &["sql", "sqlite", "db"];
const BUNDLER_CONFIGS: &[&str] = &[
    "webpack.config.",
    "vite.config.",
    "rollup.config.",
    "esbuild.config.",
];
const SSR_CONTENT_HINTS: &[&str] = &["getserversideprops", "rendertostring"];
const SPA_CONTENT_HINTS: &[&str] = &["reactdom", "createroot"];
const REALTIME_CONTENT_HINTS: &[&str] = &["websocket", "socket.io"];

pub(crate) fn detect_dependencies(index: &FileIndex) -> Dependencies {
    Dependencies {
        node: index.has_file("package.json"),
        python: index.has_file("requirements.txt")
            || index.has_file("pyproject.toml")
            || index.has_file("pipfile")
            || index.any_extension("py"),
        php: index.has_file("composer.json") || index.any_extension("php"),
        ruby: index.has_file("gemfile") || index.any_extension("rb"),
        docker: index.has_file("dockerfile") || index.any_name_contains("docker-compose"),
        database: DATABASE_NAME_HINTS
            .iter()
            .any(|hint| index.any_name_contains(hint))
            || DATABASE_EXTENSIONS.iter().any(|ext| index.any_extension(ext)),
        api: index.any_name_contains("api/")
            || index.any_name_contains("routes")
            || index.any_base_starts_with("server.")
            || index.any_base_starts_with("api."),
    }
}

pub(crate) fn detect_build_requirements(
    index: &FileIndex,
    project_type: ProjectType,
) -> BuildRequirements {
    let frontend_framework = matches!(
        project_type,
        ProjectType::Nextjs | ProjectType::Vite | ProjectType::React
    );

    BuildRequirements {
        build_step: index.has_file("package.json") || frontend_framework,
        compilation: index.any_extension("ts")
            || index.any_extension("tsx")
            || index.has_file("tsconfig.json"),
        bundling: project_type == ProjectType::Vite
            || BUNDLER_CONFIGS
                .iter()
                .any(|prefix| index.any_base_starts_with(prefix)),
        optimization: matches!(project_type, ProjectType::Nextjs | ProjectType::Vite),
    }
}

pub(crate) fn detect_special_features(
    index: &FileIndex,
    project_type: ProjectType,
    dependencies: &Dependencies,
) -> SpecialFeatures {
    let any_content = |hints: &[&str]| hints.iter().any(|h| index.any_content_contains(h));

    SpecialFeatures {
        ssr: project_type == ProjectType::Nextjs || any_content(SSR_CONTENT_HINTS),
        spa: matches!(project_type, ProjectType::React | ProjectType::Vite)
            || any_content(SPA_CONTENT_HINTS),
        pwa: index.has_file("manifest.json")
            || index.has_file("manifest.webmanifest")
            || index
                .iter()
                .any(|f| {
                    f.name.contains("service-worker")
                        || f.base == "sw.js"
                        || f.base.ends_with("-sw.js")
                })
            || index.any_content_contains("serviceworker"),
        api: dependencies.api,
        database: dependencies.database,
        realtime: index.any_name_contains("socket") || any_content(REALTIME_CONTENT_HINTS),
    }
}

#[cfg(test)]
mod tests {
    use crate::analysis::analyze;
    use deploypick_schema::{ProjectFile, ProjectType};

    #[test]
    fn test_dependencies_are_independent() {
        let analysis = analyze(&[
            ProjectFile::new("package.json", 10),
            ProjectFile::new("worker/main.py", 10),
            ProjectFile::new("Dockerfile", 10),
            ProjectFile::new("docker-compose.yml", 10),
            ProjectFile::new("prisma/schema.prisma", 10),
            ProjectFile::new("src/api/users.ts", 10),
        ]);

        let deps = analysis.dependencies;
        assert!(deps.node);
        assert!(deps.python);
        assert!(!deps.php);
        assert!(!deps.ruby);
        assert!(deps.docker);
        assert!(deps.database);
        assert!(deps.api);
        // type detection still stops at the first rule
        assert_eq!(analysis.project_type, ProjectType::Nodejs);
    }

    #[test]
    fn test_database_extensions() {
        let analysis = analyze(&[ProjectFile::new("data/app.sqlite", 10)]);
        assert!(analysis.dependencies.database);
        assert!(analysis.special_features.database);
    }

    #[test]
    fn test_api_from_server_entrypoint() {
        let analysis = analyze(&[ProjectFile::new("server.js", 10)]);
        assert!(analysis.dependencies.api);
        assert!(analysis.special_features.api);

        let analysis = analyze(&[ProjectFile::new("observer.js", 10)]);
        assert!(!analysis.dependencies.api);
    }

    #[test]
    fn test_build_requirements_for_vite_typescript() {
        let analysis = analyze(&[
            ProjectFile::new("package.json", 10),
            ProjectFile::new("vite.config.ts", 10),
            ProjectFile::new("src/main.tsx", 10),
        ]);

        let build = analysis.build_requirements;
        assert!(build.build_step);
        assert!(build.compilation);
        assert!(build.bundling);
        assert!(build.optimization);
    }

    #[test]
    fn test_webpack_bundling_without_framework() {
        let analysis = analyze(&[
            ProjectFile::new("package.json", 10),
            ProjectFile::new("webpack.config.js", 10),
        ]);

        assert_eq!(analysis.project_type, ProjectType::Nodejs);
        assert!(analysis.build_requirements.bundling);
        assert!(!analysis.build_requirements.optimization);
        assert!(!analysis.build_requirements.compilation);
    }

    #[test]
    fn test_static_site_has_no_build_step() {
        let analysis = analyze(&[ProjectFile::new("index.html", 10)]);
        assert_eq!(analysis.project_type, ProjectType::Static);
        assert!(!analysis.build_requirements.build_step);
    }

    #[test]
    fn test_content_detection() {
        let analysis = analyze(&[
            ProjectFile::new("package.json", 10),
            ProjectFile::with_content(
                "pages/index.js",
                10,
                "export async function getServerSideProps() {}",
            ),
            ProjectFile::with_content("src/main.js", 10, "ReactDOM.createRoot(root)"),
            ProjectFile::with_content(
                "src/register.js",
                10,
                "navigator.serviceWorker.register('/worker.js')",
            ),
            ProjectFile::with_content("src/live.js", 10, "const ws = new WebSocket(url)"),
        ]);

        let features = analysis.special_features;
        assert!(features.ssr);
        assert!(features.spa);
        assert!(features.pwa);
        assert!(features.realtime);
    }

    #[test]
    fn test_missing_content_is_not_detected() {
        let analysis = analyze(&[
            ProjectFile::new("package.json", 10),
            ProjectFile::new("src/main.js", 10),
        ]);

        let features = analysis.special_features;
        assert!(!features.ssr);
        assert!(!features.spa);
        assert!(!features.pwa);
        assert!(!features.realtime);
    }

    #[test]
    fn test_pwa_and_realtime_from_names() {
        let analysis = analyze(&[
            ProjectFile::new("index.html", 10),
            ProjectFile::new("public/manifest.json", 10),
            ProjectFile::new("public/sw.js", 10),
            ProjectFile::new("src/socket-client.js", 10),
        ]);

        assert!(analysis.special_features.pwa);
        assert!(analysis.special_features.realtime);
    }

    #[test]
    fn test_pwa_from_prefixed_worker_script() {
        for name in ["public/firebase-messaging-sw.js", "static/app-sw.js"] {
            let analysis = analyze(&[ProjectFile::new(name, 10)]);
            assert!(analysis.special_features.pwa, "{} should mark pwa", name);
        }

        let analysis = analyze(&[ProjectFile::new("src/news.js", 10)]);
        assert!(!analysis.special_features.pwa);
    }
}
