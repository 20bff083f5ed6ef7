//! Project commands.

use clap::Subcommand;

use workdesk_core::workspace::{ProjectDraft, ProjectPatch, ProjectStatus};

use super::todo::CliPriority;
use super::{api_client, block_on, print_json};

#[derive(Subcommand)]
pub enum ProjectAction {
    /// List projects with their task statistics
    List,
    /// Get a project
    Get {
        /// Project ID
        id: i64,
    },
    /// Create a project
    Create {
        /// Project title
        title: String,
        /// Description
        #[arg(long)]
        description: Option<String>,
        /// Priority: low, medium, or high
        #[arg(long, value_enum)]
        priority: Option<CliPriority>,
        /// Start date as ISO 8601 string
        #[arg(long)]
        start_date: Option<String>,
        /// End date as ISO 8601 string
        #[arg(long)]
        end_date: Option<String>,
    },
    /// Update a project
    Update {
        /// Project ID
        id: i64,
        /// New title
        #[arg(long)]
        title: Option<String>,
        /// New description
        #[arg(long)]
        description: Option<String>,
        /// New status: active, completed, or archived
        #[arg(long, value_enum)]
        status: Option<CliProjectStatus>,
        /// New priority
        #[arg(long, value_enum)]
        priority: Option<CliPriority>,
    },
    /// Delete a project and its tasks
    Delete {
        /// Project ID
        id: i64,
    },
    /// List a project's tasks
    Tasks {
        /// Project ID
        id: i64,
    },
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliProjectStatus {
    Active,
    Completed,
    Archived,
}

impl From<CliProjectStatus> for ProjectStatus {
    fn from(s: CliProjectStatus) -> Self {
        match s {
            CliProjectStatus::Active => ProjectStatus::Active,
            CliProjectStatus::Completed => ProjectStatus::Completed,
            CliProjectStatus::Archived => ProjectStatus::Archived,
        }
    }
}

pub fn run(action: ProjectAction) -> Result<(), Box<dyn std::error::Error>> {
    let client = api_client()?;

    match action {
        ProjectAction::List => {
            let projects = block_on(client.list_projects())??;
            print_json(&projects)
        }
        ProjectAction::Get { id } => {
            let project = block_on(client.get_project(id))??;
            print_json(&project)
        }
        ProjectAction::Create {
            title,
            description,
            priority,
            start_date,
            end_date,
        } => {
            let draft = ProjectDraft {
                title,
                description,
                status: None,
                priority: priority.map(Into::into),
                start_date,
                end_date,
            };
            let project = block_on(client.create_project(&draft))??;
            println!("Project created: {}", project.id);
            print_json(&project)
        }
        ProjectAction::Update {
            id,
            title,
            description,
            status,
            priority,
        } => {
            let patch = ProjectPatch {
                title,
                description,
                status: status.map(Into::into),
                priority: priority.map(Into::into),
                start_date: None,
                end_date: None,
            };
            let project = block_on(client.update_project(id, &patch))??;
            print_json(&project)
        }
        ProjectAction::Delete { id } => {
            block_on(client.delete_project(id))??;
            println!("Project deleted: {id}");
            Ok(())
        }
        ProjectAction::Tasks { id } => {
            let tasks = block_on(client.list_project_tasks(id))??;
            print_json(&tasks)
        }
    }
}
