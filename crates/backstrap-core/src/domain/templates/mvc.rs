//! Example controller, route and model.

use super::{Source, imports::import_path};
use crate::domain::{
    entities::{file_plan::SourceModule, options::ModelMapping},
    value_objects::{Framework, LanguageVariant},
};

const GREETING: &str = "Hello from the example controller!";

pub fn controller(variant: LanguageVariant, framework: Framework) -> String {
    let mut src = Source::new();
    match (framework, variant) {
        (Framework::Express, LanguageVariant::Typed) => {
            src.line("import { Request, Response } from 'express';")
                .blank()
                .line("export const exampleController = (_req: Request, res: Response) => {");
        }
        (Framework::Express, LanguageVariant::Untyped) => {
            src.line("export const exampleController = (_req, res) => {");
        }
        (Framework::Hono, LanguageVariant::Typed) => {
            src.line("import { Context } from 'hono';")
                .blank()
                .line("export const exampleController = (c: Context) => {");
        }
        (Framework::Hono, LanguageVariant::Untyped) => {
            src.line("export const exampleController = (c) => {");
        }
    }
    let body = match framework {
        Framework::Express => format!("    res.json({{ message: '{GREETING}' }});"),
        Framework::Hono => format!("    return c.json({{ message: '{GREETING}' }});"),
    };
    src.line(body).line("};").finish()
}

pub fn route(variant: LanguageVariant, framework: Framework) -> String {
    let controller = import_path(SourceModule::Route, SourceModule::Controller, variant);
    let mut src = Source::new();
    match framework {
        Framework::Express => {
            src.line("import { Router } from 'express';")
                .line(format!("import {{ exampleController }} from '{controller}';"))
                .blank()
                .line("const exampleRouter = Router();");
        }
        Framework::Hono => {
            src.line("import { Hono } from 'hono';")
                .line(format!("import {{ exampleController }} from '{controller}';"))
                .blank()
                .line("const exampleRouter = new Hono();");
        }
    }
    src.blank()
        .line("exampleRouter.get('/example', exampleController);")
        .blank()
        .line("export default exampleRouter;")
        .finish()
}

pub fn model(variant: LanguageVariant, mapping: ModelMapping) -> String {
    match (mapping, variant) {
        (ModelMapping::Mongoose, LanguageVariant::Typed) => Source::new()
            .line("import { Schema, model } from 'mongoose';")
            .blank()
            .line("export interface IExample {")
            .line("    name: string;")
            .line("    age: number;")
            .line("}")
            .blank()
            .line("const exampleSchema = new Schema<IExample>({")
            .line("    name: { type: String, required: true },")
            .line("    age: { type: Number, required: true },")
            .line("});")
            .blank()
            .line("export const Example = model<IExample>('Example', exampleSchema);")
            .finish(),
        (ModelMapping::Mongoose, LanguageVariant::Untyped) => Source::new()
            .line("import mongoose from 'mongoose';")
            .blank()
            .line("const exampleSchema = new mongoose.Schema({")
            .line("    name: { type: String, required: true },")
            .line("    age: { type: Number, required: true },")
            .line("});")
            .blank()
            .line("export const Example = mongoose.model('Example', exampleSchema);")
            .finish(),
        (ModelMapping::Sequelize, _) => sequelize_model(variant),
        (ModelMapping::TypeOrm, LanguageVariant::Typed) => Source::new()
            .line("import { Entity, PrimaryGeneratedColumn, Column } from 'typeorm';")
            .blank()
            .line("@Entity()")
            .line("export class Example {")
            .line("    @PrimaryGeneratedColumn()")
            .line("    id!: number;")
            .blank()
            .line("    @Column()")
            .line("    name!: string;")
            .blank()
            .line("    @Column()")
            .line("    age!: number;")
            .line("}")
            .finish(),
        // Plain JavaScript has no decorators; use a schema object instead.
        (ModelMapping::TypeOrm, LanguageVariant::Untyped) => Source::new()
            .line("import { EntitySchema } from 'typeorm';")
            .blank()
            .line("export const Example = new EntitySchema({")
            .line("    name: 'Example',")
            .line("    columns: {")
            .line("        id: { type: 'int', primary: true, generated: true },")
            .line("        name: { type: 'varchar' },")
            .line("        age: { type: 'int' },")
            .line("    },")
            .line("});")
            .finish(),
    }
}

fn sequelize_model(variant: LanguageVariant) -> String {
    let db = import_path(SourceModule::Model, SourceModule::Db, variant);
    let mut src = Source::new();
    match variant {
        LanguageVariant::Typed => {
            src.line("import { DataTypes, Model, Optional } from 'sequelize';")
                .line(format!("import {{ sequelize }} from '{db}';"))
                .blank()
                .line("interface ExampleAttributes {")
                .line("    id: number;")
                .line("    name: string;")
                .line("    age: number;")
                .line("}")
                .blank()
                .line("type ExampleCreationAttributes = Optional<ExampleAttributes, 'id'>;")
                .blank()
                .line("class Example")
                .line("    extends Model<ExampleAttributes, ExampleCreationAttributes>")
                .line("    implements ExampleAttributes")
                .line("{")
                .line("    declare id: number;")
                .line("    declare name: string;")
                .line("    declare age: number;")
                .line("}");
        }
        LanguageVariant::Untyped => {
            src.line("import { DataTypes, Model } from 'sequelize';")
                .line(format!("import {{ sequelize }} from '{db}';"))
                .blank()
                .line("class Example extends Model {}");
        }
    }
    src.blank()
        .line("Example.init(")
        .line("    {");
    if variant.is_typed() {
        src.line("        id: { type: DataTypes.INTEGER, autoIncrement: true, primaryKey: true },");
    }
    src.line("        name: { type: DataTypes.STRING, allowNull: false },")
        .line("        age: { type: DataTypes.INTEGER, allowNull: false },")
        .line("    },")
        .line("    { sequelize, modelName: 'Example' },")
        .line(");")
        .blank()
        .line("export default Example;")
        .finish()
}
