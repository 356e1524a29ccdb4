use comfy_table::{Attribute, Cell, CellAlignment, ContentArrangement, Row, Table};
use exaid_core::{
  generator::orchestrator::{CompiledApi, Orchestrator},
  source::SpecLoader,
};

use super::build_config;
use crate::{
  config_file::FileConfig,
  ui::{Colors, SourceArgs, colors::IntoComfyColor, term_width},
};

async fn compile_source(source: &SourceArgs) -> anyhow::Result<CompiledApi> {
  let cwd = std::env::current_dir()?;
  let file = FileConfig::discover(source.config.as_deref(), &cwd).await?;
  let config = build_config(source.url.clone(), None, file)?;

  let document = SpecLoader::from_url(&config.url).load().await?;
  Ok(Orchestrator::new(&document, config.type_table()).compile())
}

fn new_table(colors: &Colors, headers: &[&str]) -> Table {
  let mut table = Table::new();
  table
    .load_preset("  ── ──            ")
    .set_content_arrangement(ContentArrangement::Dynamic)
    .set_width(term_width());

  let mut row = Row::new();
  for header in headers {
    row.add_cell(Cell::new(header).fg(colors.label().into_comfy()));
  }
  table.set_header(row);
  table
}

fn operations_table(compiled: &CompiledApi, colors: &Colors) -> Table {
  let mut table = new_table(colors, &["TAG", "OPERATION", "METHOD", "PATH"]);

  for module in &compiled.modules {
    for operation in &module.operations {
      let mut row = Row::new();
      row.add_cell(Cell::new(&module.name).fg(colors.primary().into_comfy()));
      row.add_cell(
        Cell::new(&operation.name)
          .fg(colors.value().into_comfy())
          .add_attribute(Attribute::Bold),
      );
      row.add_cell(
        Cell::new(operation.method.to_string().to_uppercase())
          .fg(colors.accent().into_comfy())
          .set_alignment(CellAlignment::Right),
      );
      row.add_cell(Cell::new(&operation.path).fg(colors.primary().into_comfy()));
      table.add_row(row);
    }
  }

  table
}

fn models_table(compiled: &CompiledApi, colors: &Colors) -> Table {
  let mut table = new_table(colors, &["MODEL", "PROPERTIES", "REQUIRED"]);

  for model in &compiled.models {
    let name = if model.generics.is_empty() {
      model.name.clone()
    } else {
      format!("{}<{}>", model.name, model.generics.join(", "))
    };
    let required = model.properties.iter().filter(|property| property.required).count();

    let mut row = Row::new();
    row.add_cell(
      Cell::new(name)
        .fg(colors.value().into_comfy())
        .add_attribute(Attribute::Bold),
    );
    row.add_cell(
      Cell::new(model.properties.len())
        .fg(colors.primary().into_comfy())
        .set_alignment(CellAlignment::Right),
    );
    row.add_cell(
      Cell::new(required)
        .fg(colors.accent().into_comfy())
        .set_alignment(CellAlignment::Right),
    );
    table.add_row(row);
  }

  table
}

pub async fn list_operations(source: &SourceArgs, colors: &Colors) -> anyhow::Result<()> {
  let compiled = compile_source(source).await?;
  println!("{}", operations_table(&compiled, colors));
  Ok(())
}

pub async fn list_models(source: &SourceArgs, colors: &Colors) -> anyhow::Result<()> {
  let compiled = compile_source(source).await?;
  println!("{}", models_table(&compiled, colors));
  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::ui::colors::Theme;

  fn petstore_source() -> SourceArgs {
    SourceArgs {
      url: Some(concat!(env!("CARGO_MANIFEST_DIR"), "/../exaid-core/fixtures/petstore.json").to_string()),
      config: None,
    }
  }

  fn column(table: &Table, index: usize) -> Vec<String> {
    table
      .row_iter()
      .filter_map(|row| row.cell_iter().nth(index).map(Cell::content))
      .collect()
  }

  #[tokio::test]
  async fn test_operations_table_lists_every_operation() {
    let compiled = compile_source(&petstore_source()).await.unwrap();
    let table = operations_table(&compiled, &Colors::new(false, Theme::Dark));

    assert_eq!(
      column(&table, 1),
      vec![
        "getPetById",
        "deletePet",
        "addPet",
        "findPets",
        "uploadFile",
        "getStoreOrdersByOrderId",
        "getInventory",
      ]
    );
    assert_eq!(column(&table, 2)[1], "DELETE");
    assert_eq!(column(&table, 0)[6], "store");
  }

  #[tokio::test]
  async fn test_models_table_shows_generics() {
    let compiled = compile_source(&petstore_source()).await.unwrap();
    let table = models_table(&compiled, &Colors::new(false, Theme::Dark));

    let models = column(&table, 0);
    assert_eq!(models.len(), 6);
    assert_eq!(models[5], "PageResult<Order>");
    assert_eq!(column(&table, 1)[0], "5");
    assert_eq!(column(&table, 2)[0], "1");
  }
}
