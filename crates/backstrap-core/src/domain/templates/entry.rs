//! Entry point modules: `src/index.<ext>` and, for Hono, `src/app.<ext>`.

use super::{Source, imports::import_path};
use crate::domain::{entities::file_plan::SourceModule, value_objects::LanguageVariant};

/// Mount point of the example router.
pub const API_PREFIX: &str = "/api";

/// Express server: builds the app and listens.
pub fn express_server(variant: LanguageVariant, use_mvc: bool, has_db: bool) -> String {
    let from = SourceModule::Index;
    let mut src = Source::new();

    match variant {
        LanguageVariant::Typed => src.line("import express, { Request, Response } from 'express';"),
        LanguageVariant::Untyped => src.line("import express from 'express';"),
    };
    src.line(import_config(from, variant));
    if has_db {
        src.line(import_connector(from, variant));
    }
    if use_mvc {
        src.line(format!(
            "import exampleRouter from '{}';",
            import_path(from, SourceModule::Route, variant)
        ));
    }

    let handler_args = match variant {
        LanguageVariant::Typed => "_req: Request, res: Response",
        LanguageVariant::Untyped => "_req, res",
    };
    src.blank()
        .line("const app = express();")
        .blank()
        .line("app.use(express.json());")
        .line("app.use(express.urlencoded({ extended: true }));")
        .blank()
        .line(format!("app.get('/', ({handler_args}) => {{"))
        .line("    res.send('Hello from Express!');")
        .line("});");
    if use_mvc {
        src.blank()
            .line(format!("app.use('{API_PREFIX}', exampleRouter);"));
    }

    src.blank().line("const start = async () => {");
    if has_db {
        src.line("    await connectDB();");
    }
    src.line("    app.listen(config.port, () => {")
        .line("        console.log(`Server running on http://localhost:${config.port}`);")
        .line("    });")
        .line("};")
        .blank();
    start_call(&mut src);
    src.finish()
}

/// Hono app construction. Does not listen.
pub fn hono_app(variant: LanguageVariant, use_mvc: bool) -> String {
    let mut src = Source::new();
    src.line("import { Hono } from 'hono';");
    if use_mvc {
        src.line(format!(
            "import exampleRouter from '{}';",
            import_path(SourceModule::App, SourceModule::Route, variant)
        ));
    }
    src.blank()
        .line("const app = new Hono();")
        .blank()
        .line("app.get('/', (c) => c.text('Hello from Hono!'));");
    if use_mvc {
        src.line(format!("app.route('{API_PREFIX}', exampleRouter);"));
    }
    src.blank().line("export default app;").finish()
}

/// Hono server binding: imports the app and serves it.
pub fn hono_server(variant: LanguageVariant, has_db: bool) -> String {
    let from = SourceModule::Index;
    let mut src = Source::new();
    src.line("import { serve } from '@hono/node-server';")
        .line(format!(
            "import app from '{}';",
            import_path(from, SourceModule::App, variant)
        ))
        .line(import_config(from, variant));
    if has_db {
        src.line(import_connector(from, variant));
    }

    src.blank().line("const start = async () => {");
    if has_db {
        src.line("    await connectDB();");
    }
    src.line("    serve({ fetch: app.fetch, port: config.port }, (info) => {")
        .line("        console.log(`Server running on http://localhost:${info.port}`);")
        .line("    });")
        .line("};")
        .blank();
    start_call(&mut src);
    src.finish()
}

fn import_config(from: SourceModule, variant: LanguageVariant) -> String {
    format!(
        "import {{ config }} from '{}';",
        import_path(from, SourceModule::Config, variant)
    )
}

fn import_connector(from: SourceModule, variant: LanguageVariant) -> String {
    format!(
        "import {{ connectDB }} from '{}';",
        import_path(from, SourceModule::Db, variant)
    )
}

fn start_call(src: &mut Source) {
    src.line("start().catch((error) => {")
        .line("    console.error('Failed to start server:', error);")
        .line("    process.exit(1);")
        .line("});");
}
