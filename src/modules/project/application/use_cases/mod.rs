pub mod create_project;
pub mod delete_project;
pub mod get_projects;
pub mod get_single_project;
pub mod update_project;

pub use create_project::{CreateProjectService, CreateProjectUseCase};
pub use delete_project::{DeleteProjectService, DeleteProjectUseCase};
pub use get_projects::{GetProjectsService, GetProjectsUseCase};
pub use get_single_project::{GetSingleProjectError, GetSingleProjectService, GetSingleProjectUseCase};
pub use update_project::{UpdateProjectService, UpdateProjectUseCase};
