mod commands;

use anyhow::Result;
use clap::Parser;
use commands::RestCommand;
use recipes_client::RecipesClient;
use recipes_core::{Recipe, RecipeSearch};
use reqwest::StatusCode;
use std::io::{self, BufRead, Write};

#[derive(Parser)]
#[command(name = "recipes-client")]
#[command(about = "Recipes REST API client", long_about = None)]
struct Cli {
    /// Server URL (default: http://localhost:8080)
    #[arg(long, default_value = "http://localhost:8080")]
    server: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let client = RecipesClient::new(cli.server);

    display_help();

    let mut input = io::stdin().lock();

    loop {
        let Some(line) = read_command_line(&mut input)? else {
            break;
        };

        let Some(command) = RestCommand::parse(&line) else {
            eprintln!("Command not recognized: {line}");
            continue;
        };

        match command {
            RestCommand::List => list_recipes(&client).await,
            RestCommand::Search => search_recipes(&client, &mut input).await?,
            RestCommand::Add => create_recipe(&client, &mut input).await?,
            RestCommand::Delete => delete_recipe(&client, &mut input).await?,
            RestCommand::Update => update_recipe(&client, &mut input).await?,
            RestCommand::Help => display_help(),
            RestCommand::Quit => break,
        }
    }

    Ok(())
}

fn display_help() {
    println!(
        "\
Recipes REST API client application

{list} - List all recipes
{search} - Search recipes by duration range
{add} - Add a recipe
{delete} - Delete a recipe
{update} - Update an existing recipe
{help} - Display this menu
{quit} - Exit the application
",
        list = RestCommand::List,
        search = RestCommand::Search,
        add = RestCommand::Add,
        delete = RestCommand::Delete,
        update = RestCommand::Update,
        help = RestCommand::Help,
        quit = RestCommand::Quit,
    );
}

async fn list_recipes(client: &RecipesClient) {
    match client.list().await {
        Ok(recipes) => {
            for recipe in &recipes {
                println!("{recipe}");
            }
        }
        Err(e) => eprintln!("Failed to list recipes: {e}"),
    }
}

async fn search_recipes(client: &RecipesClient, input: &mut impl BufRead) -> Result<()> {
    let search = RecipeSearch {
        duration_from: Some(prompt_i64(input, "Duration From: ")?),
        duration_to: Some(prompt_i64(input, "Duration To: ")?),
    };

    match client.search(&search).await {
        Ok(recipes) => {
            for recipe in &recipes {
                println!("{recipe}");
            }
        }
        Err(e) => eprintln!("Failed to search recipes: {e}"),
    }

    Ok(())
}

async fn create_recipe(client: &RecipesClient, input: &mut impl BufRead) -> Result<()> {
    let recipe = recipe_from_user(input)?;

    match client.create(&recipe).await? {
        StatusCode::OK => println!("Recipe successfully created"),
        StatusCode::BAD_REQUEST => eprintln!("Recipe is not valid"),
        status => eprintln!("Unexpected response: {status}"),
    }

    Ok(())
}

async fn delete_recipe(client: &RecipesClient, input: &mut impl BufRead) -> Result<()> {
    let id = prompt_i64(input, "Recipe ID: ")?;

    match client.delete(id).await? {
        StatusCode::NO_CONTENT => println!("Recipe with id {id} successfully deleted"),
        StatusCode::NOT_FOUND => eprintln!("Recipe with id {id} does not exist"),
        status => eprintln!("Unexpected response: {status}"),
    }

    Ok(())
}

async fn update_recipe(client: &RecipesClient, input: &mut impl BufRead) -> Result<()> {
    let id = prompt_i64(input, "Recipe ID: ")?;
    let recipe = recipe_from_user(input)?;

    match client.update(id, &recipe).await? {
        StatusCode::NO_CONTENT => println!("Recipe with id {id} successfully updated"),
        StatusCode::NOT_FOUND => eprintln!("Recipe with id {id} does not exist"),
        StatusCode::BAD_REQUEST => eprintln!("Recipe is not valid"),
        status => eprintln!("Unexpected response: {status}"),
    }

    Ok(())
}

/// Prompts for the three user-supplied fields. A blank text answer means
/// "keep existing" on update, per the server's merge rule.
fn recipe_from_user(input: &mut impl BufRead) -> Result<Recipe> {
    let name = prompt(input, "Recipe Name: ")?;
    let description = prompt(input, "Recipe Description: ")?;
    let duration = prompt_i64(input, "Recipe Duration: ")?;

    Ok(Recipe {
        id: None,
        name: Some(name),
        description: Some(description),
        duration_in_minutes: Some(duration),
    })
}

/// Reads the next non-empty trimmed line; `None` on end of input.
fn read_command_line(input: &mut impl BufRead) -> Result<Option<String>> {
    loop {
        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        let line = line.trim();
        if !line.is_empty() {
            return Ok(Some(line.to_string()));
        }
    }
}

fn prompt(input: &mut impl BufRead, label: &str) -> Result<String> {
    print!("{label}");
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        anyhow::bail!("input closed");
    }

    Ok(line.trim().to_string())
}

fn prompt_i64(input: &mut impl BufRead, label: &str) -> Result<i64> {
    loop {
        let value = prompt(input, label)?;

        if let Ok(value) = value.parse() {
            return Ok(value);
        }
    }
}
