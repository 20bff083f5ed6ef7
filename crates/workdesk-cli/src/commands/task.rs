//! Project-task commands.

use clap::Subcommand;

use workdesk_core::workspace::{TaskDraft, TaskPatch, TaskStatus};

use super::todo::CliPriority;
use super::{api_client, block_on, print_json};

#[derive(Subcommand)]
pub enum TaskAction {
    /// Create a task in a project
    Create {
        /// Task title
        title: String,
        /// Owning project ID
        #[arg(long)]
        project_id: i64,
        /// Description
        #[arg(long)]
        description: Option<String>,
        /// Priority: low, medium, or high
        #[arg(long, value_enum)]
        priority: Option<CliPriority>,
        /// Assignee name
        #[arg(long)]
        assignee: Option<String>,
        /// Due date as ISO 8601 string
        #[arg(long)]
        due_date: Option<String>,
    },
    /// Get a task
    Get {
        /// Task ID
        id: i64,
    },
    /// Update a task
    Update {
        /// Task ID
        id: i64,
        /// New title
        #[arg(long)]
        title: Option<String>,
        /// New description
        #[arg(long)]
        description: Option<String>,
        /// New status: todo, in-progress, or done
        #[arg(long, value_enum)]
        status: Option<CliTaskStatus>,
        /// New priority
        #[arg(long, value_enum)]
        priority: Option<CliPriority>,
        /// New assignee
        #[arg(long)]
        assignee: Option<String>,
    },
    /// Delete a task
    Delete {
        /// Task ID
        id: i64,
    },
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliTaskStatus {
    Todo,
    InProgress,
    Done,
}

impl From<CliTaskStatus> for TaskStatus {
    fn from(s: CliTaskStatus) -> Self {
        match s {
            CliTaskStatus::Todo => TaskStatus::Todo,
            CliTaskStatus::InProgress => TaskStatus::InProgress,
            CliTaskStatus::Done => TaskStatus::Done,
        }
    }
}

pub fn run(action: TaskAction) -> Result<(), Box<dyn std::error::Error>> {
    let client = api_client()?;

    match action {
        TaskAction::Create {
            title,
            project_id,
            description,
            priority,
            assignee,
            due_date,
        } => {
            let draft = TaskDraft {
                title,
                project_id,
                description,
                status: None,
                priority: priority.map(Into::into),
                assignee,
                due_date,
            };
            let task = block_on(client.create_task(&draft))??;
            println!("Task created: {}", task.id);
            print_json(&task)
        }
        TaskAction::Get { id } => {
            let task = block_on(client.get_task(id))??;
            print_json(&task)
        }
        TaskAction::Update {
            id,
            title,
            description,
            status,
            priority,
            assignee,
        } => {
            let patch = TaskPatch {
                title,
                description,
                status: status.map(Into::into),
                priority: priority.map(Into::into),
                assignee,
                due_date: None,
            };
            let task = block_on(client.update_task(id, &patch))??;
            print_json(&task)
        }
        TaskAction::Delete { id } => {
            block_on(client.delete_task(id))??;
            println!("Task deleted: {id}");
            Ok(())
        }
    }
}
