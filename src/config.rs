use crate::roster;
use anyhow::{anyhow, Result};
use serde::Deserialize;
use std::fs::File;
use std::path::{Path, PathBuf};

/// The name of the roster file searched for by [`Config::from_directory`].
pub const ROSTER_FILE: &str = "team.yaml";

const DEFAULT_OUTPUT: &str = "team_members.html";
const DEFAULT_ASSETS_PREFIX: &str = "/assets/pics/";
const DEFAULT_ROLE: &str = "Team Member";

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct Project {
    output: Option<PathBuf>,

    assets_prefix: Option<String>,

    role: Option<String>,

    members: Option<Vec<String>>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub output: PathBuf,
    pub assets_prefix: String,
    pub role: String,
    pub members: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            output: PathBuf::from(DEFAULT_OUTPUT),
            assets_prefix: DEFAULT_ASSETS_PREFIX.to_owned(),
            role: DEFAULT_ROLE.to_owned(),
            members: roster::members(),
        }
    }
}

impl Config {
    /// Resolves the configuration the binary runs with. An explicit roster
    /// file wins over searching `cwd` and its ancestors, and an explicit
    /// `output` wins over whatever the roster file says.
    pub fn load(roster_file: Option<&Path>, output: Option<&Path>, cwd: &Path) -> Result<Config> {
        let mut config = match roster_file {
            Some(path) => Config::from_project_file(path)?,
            None => Config::from_directory(cwd)?,
        };
        if let Some(output) = output {
            config.output = output.to_owned();
        }
        Ok(config)
    }

    /// Looks for [`ROSTER_FILE`] in `dir` and each of its ancestors. The first
    /// one found is loaded; if there is none, the built-in defaults are used.
    pub fn from_directory(dir: &Path) -> Result<Config> {
        for dir in dir.ancestors() {
            let path = dir.join(ROSTER_FILE);
            if path.exists() {
                return match Config::from_project_file(&path) {
                    Ok(config) => Ok(config),
                    Err(e) => Err(anyhow!("Loading configuration: {:?}", e)),
                };
            }
        }
        Ok(Config::default())
    }

    /// Loads a roster file. Keys missing from the file keep their defaults,
    /// except that the output path, given or not, is resolved against the
    /// file's directory.
    pub fn from_project_file(path: &Path) -> Result<Config> {
        let project: Project = serde_yaml::from_reader(open_roster(path)?)?;
        let project_root = path.parent().ok_or_else(|| {
            anyhow!(
                "Can't get parent directory for provided roster file path '{:?}'",
                path
            )
        })?;

        let defaults = Config::default();
        Ok(Config {
            output: project_root.join(project.output.unwrap_or(defaults.output)),
            assets_prefix: project.assets_prefix.unwrap_or(defaults.assets_prefix),
            role: project.role.unwrap_or(defaults.role),
            members: project.members.unwrap_or(defaults.members),
        })
    }
}

fn open_roster(path: &Path) -> Result<File> {
    match File::open(path) {
        Err(e) => Err(anyhow!("Opening roster file `{}`: {}", path.display(), e)),
        Ok(file) => Ok(file),
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::fs;

    #[test]
    fn test_default_is_builtin_roster() {
        let config = Config::default();
        assert_eq!(PathBuf::from("team_members.html"), config.output);
        assert_eq!("/assets/pics/", config.assets_prefix);
        assert_eq!("Team Member", config.role);
        assert_eq!(21, config.members.len());
        assert_eq!("Mr. Vihan Joshi.jpg", config.members[20]);
    }

    #[test]
    fn test_from_project_file_overrides() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join(ROSTER_FILE);
        fs::write(
            &path,
            "output: public/team.html\nrole: Mentor\nmembers:\n  - Mr. Jay Patel.jpg\n",
        )?;

        let config = Config::from_project_file(&path)?;
        assert_eq!(dir.path().join("public/team.html"), config.output);
        assert_eq!("/assets/pics/", config.assets_prefix);
        assert_eq!("Mentor", config.role);
        assert_eq!(vec!["Mr. Jay Patel.jpg".to_owned()], config.members);
        Ok(())
    }

    #[test]
    fn test_from_project_file_role_only() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join(ROSTER_FILE);
        fs::write(&path, "role: Team Member\n")?;

        let config = Config::from_project_file(&path)?;
        assert_eq!(
            Config {
                output: dir.path().join("team_members.html"),
                ..Config::default()
            },
            config
        );
        Ok(())
    }

    #[test]
    fn test_from_project_file_unknown_key() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join(ROSTER_FILE);
        fs::write(&path, "colour: red\n")?;

        assert!(Config::from_project_file(&path).is_err());
        Ok(())
    }

    #[test]
    fn test_from_project_file_missing() {
        let dir = tempfile::tempdir().unwrap();
        assert!(Config::from_project_file(&dir.path().join(ROSTER_FILE)).is_err());
    }

    #[test]
    fn test_from_directory_searches_ancestors() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let nested = dir.path().join("site").join("pages");
        fs::create_dir_all(&nested)?;
        fs::write(
            dir.path().join(ROSTER_FILE),
            "assets_prefix: /img/\n",
        )?;

        let config = Config::from_directory(&nested)?;
        assert_eq!("/img/", config.assets_prefix);
        assert_eq!(21, config.members.len());
        assert_eq!(dir.path().join("team_members.html"), config.output);
        Ok(())
    }

    #[test]
    fn test_from_directory_without_roster_file() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let nested = dir.path().join("site");
        fs::create_dir_all(&nested)?;

        assert_eq!(Config::default(), Config::from_directory(&nested)?);
        Ok(())
    }

    #[test]
    fn test_load_output_overrides_roster_file() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let nested = dir.path().join("site");
        fs::create_dir_all(&nested)?;
        fs::write(
            dir.path().join(ROSTER_FILE),
            "output: public/team.html\nmembers:\n  - Mr. Jay Patel.jpg\n",
        )?;
        let output = nested.join("elsewhere.html");

        let config = Config::load(None, Some(output.as_path()), &nested)?;
        assert_eq!(output, config.output);
        assert_eq!(vec!["Mr. Jay Patel.jpg".to_owned()], config.members);

        let roster_file = dir.path().join(ROSTER_FILE);
        let config = Config::load(Some(roster_file.as_path()), None, &nested)?;
        assert_eq!(dir.path().join("public/team.html"), config.output);
        Ok(())
    }

    #[test]
    fn test_load_explicit_roster_file_must_exist() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.yaml");
        assert!(Config::load(Some(missing.as_path()), None, dir.path()).is_err());
    }
}
