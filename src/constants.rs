//! Application-wide constants.
//!
//! Fixed names and paths shared with the external inference routine live here
//! so the naming contract is defined in one place.

/// Application name used for data directories and user-facing messages.
pub const APP_NAME: &str = "fetalseg";

/// Environment variable that overrides the installation root.
pub const INSTALL_ROOT_ENV: &str = "FETALSEG_ROOT";

/// Value of `inference.model_to_load` that selects the bundled checkpoint.
pub const DEFAULT_MODEL_SENTINEL: &str = "default";

/// Postfix the inference routine appends to its output file names.
pub const SEG_POSTFIX: &str = "seg";

/// Paths of bundled resources, relative to the installation root.
pub mod bundled {
    /// Directory holding the bundled configuration files.
    pub const CONFIG_DIR: &str = "config";

    /// File name of the default inference configuration.
    pub const CONFIG_FILE: &str = "monai_dynUnet_inference_config.yml";

    /// Directory holding the bundled model checkpoints.
    pub const MODELS_DIR: &str = "models";

    /// File name of the default DynUNet checkpoint.
    pub const CHECKPOINT_FILE: &str = "checkpoint_dynUnet_DiceXent.pt";
}

/// NIfTI file extensions recognised for input volumes.
pub mod nifti {
    /// Compressed NIfTI extension.
    pub const COMPRESSED: &str = ".nii.gz";

    /// Uncompressed NIfTI extension.
    pub const UNCOMPRESSED: &str = ".nii";
}

/// Arguments used to hand an image and its configuration to the runner.
pub mod runner_args {
    /// Flag preceding the input image path.
    pub const INPUT_DATA: &str = "--input_data";

    /// Flag preceding the configuration snapshot path.
    pub const CONFIG_INFO: &str = "--config_info";
}
