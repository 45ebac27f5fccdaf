use std::env;
use uploadwidget::{
    HttpTransport, SelectedFile, SelectionEvent, UploadConfig, UploadController,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Endpoint from environment variable
    let upload_url = env::var("UPLOAD_URL")
        .expect("UPLOAD_URL environment variable must be set");

    let config = UploadConfig {
        max_size: 10,
        bytes_per_unit: Some(1_000_000),
        accepted_mime_type: "text/plain".to_string(),
        upload_url,
        ..Default::default()
    };

    let transport = HttpTransport::new(config.clone())?;
    let mut controller = UploadController::new(config, transport)?;

    // Mirror state changes the way a rendering layer would
    controller.set_on_state_change(|state| {
        println!("UI state: {:?}", state);
    });

    let file_path = "files/notes.txt";

    println!("Checking if file exists at path: {}", file_path);
    if !std::path::Path::new(file_path).exists() {
        println!("Warning: File does not exist at path: {}", file_path);
        println!("Please provide a valid path to a text file.");
        return Ok(());
    }

    let file = SelectedFile::from_path(file_path).await?;
    println!(
        "Selected {} ({} bytes, {})",
        file.name, file.size_bytes, file.mime_type
    );

    match controller
        .handle_selection(SelectionEvent::single(file))
        .await?
    {
        Some(response) => {
            println!("Upload complete! Status: {}", response.status);
        }
        None => {
            println!("File rejected.");
            if let Some(label) = &controller.ui_state().error_label {
                println!("Error label: {}", label);
            }
            if let Some(status_id) = &controller.ui_state().status_id {
                println!("Type status: {}", status_id);
            }
        }
    }

    Ok(())
}
