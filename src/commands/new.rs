use miette::Result;

pub fn run() -> Result<()> {
    sipa::run_new_project_wizard()?;
    Ok(())
}
