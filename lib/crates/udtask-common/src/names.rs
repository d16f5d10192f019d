/// Task input names bound by the pipeline host
pub mod inputs {
    /// Endpoint reference holding the server URL and authorization record
    pub const SERVER_ENDPOINT: &str = "serverEndpoint";

    /// Explicit udclient install location.
    /// The host fills it with the checkout root when left unset, so that
    /// value means "search the PATH".
    pub const UDCLIENT_LOCATION: &str = "udClientLocation";

    /// Working directory handed to every deploy client process
    pub const WORKING_DIRECTORY: &str = "workingDirectory";

    /// Component the version is created under
    pub const COMPONENT_ID: &str = "udComponentId";

    /// Name of the component version to create
    pub const COMPONENT_VERSION_NAME: &str = "udComponentVersionName";

    /// File or directory to upload into the new version
    pub const FILE_TO_UPLOAD: &str = "fileToUpload";

    /// Status applied to the version after upload
    pub const OPTIONAL_TAG: &str = "udOptionalTag";

    /// Newline-delimited arguments forwarded on every invocation
    pub const GLOBAL_COMMAND_ARGS: &str = "udGlobalCommandArgs";

    /// Newline-delimited udclient command line for the generic task
    pub const COMMAND_ARGS: &str = "udClientCommandArgs";

    /// `true` to pass `--verbose` to udclient
    pub const VERBOSE: &str = "udVerbose";

    /// `true` to run the launcher script instead of `java -jar udclient.jar`
    pub const USE_LAUNCHER: &str = "udClientUseLauncher";
}

/// Host variables read by the tasks
pub mod variables {
    pub const SOURCES_DIRECTORY: &str = "build.sourcesDirectory";
    pub const BUILD_NUMBER: &str = "Build.BuildNumber";
    pub const BUILD_ID: &str = "Build.BuildId";
    pub const COLLECTION_URI: &str = "System.TeamFoundationCollectionUri";
    pub const TEAM_PROJECT: &str = "System.TeamProject";
    pub const SYSTEM_DEBUG: &str = "System.Debug";
    pub const JAVA_HOME: &str = "JAVA_HOME";
}

/// udclient layout, subcommands and flags
pub mod udclient {
    /// Shell launcher; also the PATH lookup name
    pub const LAUNCHER: &str = "udclient";

    /// Windows launcher
    pub const WINDOWS_LAUNCHER: &str = "udclient.cmd";

    /// Packaged artifact both launchers call into
    pub const ARTIFACT: &str = "udclient.jar";

    /// Extension of the packaged artifact
    pub const ARTIFACT_EXTENSION: &str = "jar";

    /// Runtime that loads the artifact
    pub const RUNTIME: &str = "java";

    /// Flag telling the runtime to load a packaged artifact
    pub const RUNTIME_JAR_FLAG: &str = "-jar";

    pub const VERBOSE_FLAG: &str = "--verbose";
    pub const WEBURL_FLAG: &str = "-weburl";
    pub const USERNAME_FLAG: &str = "-username";
    pub const PASSWORD_FLAG: &str = "-password";
    pub const AUTHTOKEN_FLAG: &str = "-authtoken";

    pub const CREATE_VERSION: &str = "createVersion";
    pub const ADD_VERSION_FILES: &str = "addVersionFiles";
    pub const ADD_VERSION_LINK: &str = "addVersionLink";
    pub const ADD_VERSION_STATUS: &str = "addVersionStatus";

    /// Prefix of the traceability link name; the build number follows
    pub const LINK_NAME_PREFIX: &str = "VSTS Build: ";
}
