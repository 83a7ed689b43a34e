use anyhow::Result;
use colored::Colorize;
use regform::{validate_attachment, Attachment, AttachmentLimits, AttachmentRejection, RegformConfig};
use std::path::Path;

pub fn execute(file: &Path, config_path: &Path) -> Result<()> {
    let config = RegformConfig::load(config_path)?;
    let limits = AttachmentLimits::from(&config.attachment);

    let attachment = match Attachment::load(file, &limits) {
        Ok(attachment) => attachment,
        Err(e) => {
            if let Some(rejection) = e.downcast_ref::<AttachmentRejection>() {
                println!("{}", rejection.to_string().red());
            }
            return Err(e);
        }
    };

    if let Err(rejection) = validate_attachment(&attachment, &limits) {
        println!("{}", rejection.to_string().red());
        return Err(rejection.into());
    }

    println!("{}", "Attachment accepted".green().bold());
    println!("Preview: {}", attachment.caption().cyan());
    println!("Type: {}", attachment.mime_type);
    println!("Data URL: {} characters", attachment.data_url().len());

    Ok(())
}
