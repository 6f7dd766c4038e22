//! Files written into every scaffolded project.
//!
//! Contents are fixed at compile time and do not depend on the project name,
//! so the same tree is produced for every run.

pub mod api_client;
pub mod middleware;
pub mod pages;

/// A file to write, relative to the project root
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemplateFile {
    pub path: &'static str,
    pub contents: &'static str,
}

/// Directories created before any file is written
pub const PROJECT_DIRECTORIES: &[&str] = &[
    "src/app/(private)/home",
    "src/app/(public)/login",
    "src/app/(public)/register",
];

/// Entry page generated by `create-next-app`; it collides with `(public)/page.tsx`
pub const STALE_ENTRY_PAGE: &str = "src/app/page.tsx";

pub const TEMPLATE_FILES: &[TemplateFile] = &[
    TemplateFile {
        path: "src/app/(private)/home/page.tsx",
        contents: pages::PRIVATE_HOME_PAGE,
    },
    TemplateFile {
        path: "src/app/(private)/layout.tsx",
        contents: pages::PRIVATE_LAYOUT,
    },
    TemplateFile {
        path: "src/app/(public)/login/page.tsx",
        contents: pages::LOGIN_PAGE,
    },
    TemplateFile {
        path: "src/app/(public)/register/page.tsx",
        contents: pages::REGISTER_PAGE,
    },
    TemplateFile {
        path: "src/app/(public)/page.tsx",
        contents: pages::PUBLIC_LANDING_PAGE,
    },
    TemplateFile {
        path: "src/app/(public)/layout.tsx",
        contents: pages::PUBLIC_LAYOUT,
    },
    TemplateFile {
        path: "src/middleware.ts",
        contents: middleware::MIDDLEWARE,
    },
    TemplateFile {
        path: "src/utils/setCookie.ts",
        contents: middleware::SET_COOKIE,
    },
    TemplateFile {
        path: "src/api/api.ts",
        contents: api_client::API_CLIENT,
    },
    TemplateFile {
        path: ".env",
        contents: api_client::ENV_FILE,
    },
    TemplateFile {
        path: "orval.config.ts",
        contents: api_client::ORVAL_CONFIG,
    },
];

/// Route pages and layouts come first in `TEMPLATE_FILES`, configuration after
const PAGE_TEMPLATE_COUNT: usize = 6;

/// Pages and layouts under `src/app`
pub fn page_templates() -> &'static [TemplateFile] {
    &TEMPLATE_FILES[..PAGE_TEMPLATE_COUNT]
}

/// Middleware, helpers, API client and project configuration
pub fn config_templates() -> &'static [TemplateFile] {
    &TEMPLATE_FILES[PAGE_TEMPLATE_COUNT..]
}

/// Look up a template by its relative path
pub fn find(path: &str) -> Option<&'static TemplateFile> {
    TEMPLATE_FILES.iter().find(|file| file.path == path)
}
