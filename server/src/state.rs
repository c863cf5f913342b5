use std::path::PathBuf;

#[derive(Clone)]
pub struct AppState {
    pub drawings_dir: PathBuf,
}
