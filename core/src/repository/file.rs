use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{anyhow, Result};

use crate::model::task::Task;
use crate::repository::traits::TaskRepository;

const DEFAULT_FILE_NAME: &str = "tasks.json";

#[derive(Clone)]
pub struct FileTaskRepository {
    file_path: PathBuf,
}

impl FileTaskRepository {
    pub fn new(base_dir: Option<PathBuf>) -> Result<Self> {
        let mut path = match base_dir {
            Some(dir) => dir,
            None => {
                let home_dir = dirs::home_dir()
                    .ok_or_else(|| anyhow!("Could not determine home directory"))?;
                home_dir.join(".tasktrack")
            }
        };
        fs::create_dir_all(&path)?;
        path.push(DEFAULT_FILE_NAME);

        Ok(FileTaskRepository { file_path: path })
    }
}

impl TaskRepository for FileTaskRepository {
    fn load(&self) -> Result<Vec<Task>> {
        // A store that was never written to is an empty store, not an error.
        if !self.file_path.exists() {
            return Ok(Vec::new());
        }
        let file = File::open(&self.file_path)?;
        let reader = BufReader::new(file);
        let tasks = serde_json::from_reader(reader)?;
        Ok(tasks)
    }

    fn save(&self, tasks: &[Task]) -> Result<()> {
        // Write to a sibling temp file and rename over the target so a
        // failed write leaves the previous store intact.
        let tmp_path = self.file_path.with_extension("json.tmp");
        {
            let file = File::create(&tmp_path)?;
            let mut writer = BufWriter::new(file);
            serde_json::to_writer_pretty(&mut writer, tasks)?;
            writer.flush()?;
        }
        fs::rename(&tmp_path, &self.file_path)?;
        Ok(())
    }
}
