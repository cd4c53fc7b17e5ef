//! Resource name templates.
//!
//! Each template has a builder, `log_path("my-project", "my-log")`, and a
//! parser returning the named components, `parse_log_path(name)`. Parsing a
//! built name yields the original components as long as none contains `/`.
use std::collections::HashMap;

/// A `/` separated resource name pattern such as
/// `projects/{project}/logs/{log}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathTemplate {
    pattern: &'static str,
}

fn variable(segment: &str) -> Option<&str> {
    segment.strip_prefix('{')?.strip_suffix('}')
}

impl PathTemplate {
    pub const fn new(pattern: &'static str) -> Self {
        PathTemplate { pattern }
    }

    pub fn pattern(&self) -> &'static str {
        self.pattern
    }

    /// The variable names, in order.
    pub fn variables(&self) -> impl Iterator<Item = &'static str> {
        self.pattern.split('/').filter_map(variable)
    }

    /// Substitutes `values` for the variables, in order.
    pub fn render(&self, values: &[&str]) -> String {
        let mut values = values.iter();
        self.pattern
            .split('/')
            .map(|segment| match variable(segment) {
                Some(_) => values.next().copied().unwrap_or_default(),
                None => segment,
            })
            .collect::<Vec<_>>()
            .join("/")
    }

    /// Matches `path` against the template. Every variable must match one
    /// non-empty segment.
    pub fn parse(&self, path: &str) -> Option<HashMap<&'static str, String>> {
        let mut segments = path.split('/');
        let mut components = HashMap::new();
        for expected in self.pattern.split('/') {
            let segment = segments.next()?;
            match variable(expected) {
                Some(name) if !segment.is_empty() => {
                    components.insert(name, segment.to_string());
                }
                Some(_) => return None,
                None if expected == segment => {}
                None => return None,
            }
        }
        if segments.next().is_some() {
            return None;
        }
        Some(components)
    }
}

macro_rules! path_templates {
    ($(
        $(#[$meta:meta])*
        $build:ident($($arg:ident),+), $parse:ident => $pattern:literal;
    )*) => {$(
        $(#[$meta])*
        pub fn $build($($arg: &str),+) -> String {
            PathTemplate::new($pattern).render(&[$($arg),+])
        }

        #[doc = concat!("Parses a `", $pattern, "` name into its components.")]
        pub fn $parse(path: &str) -> Option<HashMap<&'static str, String>> {
            PathTemplate::new($pattern).parse(path)
        }
    )*};
}

path_templates! {
    /// A log in a project. Log ids containing `/` must be URL encoded.
    log_path(project, log), parse_log_path => "projects/{project}/logs/{log}";
    organization_log_path(organization, log), parse_organization_log_path =>
        "organizations/{organization}/logs/{log}";
    folder_log_path(folder, log), parse_folder_log_path => "folders/{folder}/logs/{log}";
    billing_account_log_path(billing_account, log), parse_billing_account_log_path =>
        "billingAccounts/{billing_account}/logs/{log}";

    /// A sink in a project.
    log_sink_path(project, sink), parse_log_sink_path => "projects/{project}/sinks/{sink}";
    organization_log_sink_path(organization, sink), parse_organization_log_sink_path =>
        "organizations/{organization}/sinks/{sink}";
    folder_log_sink_path(folder, sink), parse_folder_log_sink_path =>
        "folders/{folder}/sinks/{sink}";
    billing_account_log_sink_path(billing_account, sink), parse_billing_account_log_sink_path =>
        "billingAccounts/{billing_account}/sinks/{sink}";

    log_exclusion_path(project, exclusion), parse_log_exclusion_path =>
        "projects/{project}/exclusions/{exclusion}";
    organization_log_exclusion_path(organization, exclusion), parse_organization_log_exclusion_path =>
        "organizations/{organization}/exclusions/{exclusion}";
    folder_log_exclusion_path(folder, exclusion), parse_folder_log_exclusion_path =>
        "folders/{folder}/exclusions/{exclusion}";
    billing_account_log_exclusion_path(billing_account, exclusion), parse_billing_account_log_exclusion_path =>
        "billingAccounts/{billing_account}/exclusions/{exclusion}";

    /// A log bucket. `location` is a region or `global`.
    log_bucket_path(project, location, bucket), parse_log_bucket_path =>
        "projects/{project}/locations/{location}/buckets/{bucket}";
    organization_log_bucket_path(organization, location, bucket), parse_organization_log_bucket_path =>
        "organizations/{organization}/locations/{location}/buckets/{bucket}";
    folder_log_bucket_path(folder, location, bucket), parse_folder_log_bucket_path =>
        "folders/{folder}/locations/{location}/buckets/{bucket}";
    billing_account_log_bucket_path(billing_account, location, bucket), parse_billing_account_log_bucket_path =>
        "billingAccounts/{billing_account}/locations/{location}/buckets/{bucket}";

    log_view_path(project, location, bucket, view), parse_log_view_path =>
        "projects/{project}/locations/{location}/buckets/{bucket}/views/{view}";
    organization_log_view_path(organization, location, bucket, view), parse_organization_log_view_path =>
        "organizations/{organization}/locations/{location}/buckets/{bucket}/views/{view}";
    folder_log_view_path(folder, location, bucket, view), parse_folder_log_view_path =>
        "folders/{folder}/locations/{location}/buckets/{bucket}/views/{view}";
    billing_account_log_view_path(billing_account, location, bucket, view), parse_billing_account_log_view_path =>
        "billingAccounts/{billing_account}/locations/{location}/buckets/{bucket}/views/{view}";

    /// A logs-based metric. Metrics only exist in projects.
    log_metric_path(project, metric), parse_log_metric_path => "projects/{project}/metrics/{metric}";

    cmek_settings_path(project), parse_cmek_settings_path => "projects/{project}/cmekSettings";
    organization_cmek_settings_path(organization), parse_organization_cmek_settings_path =>
        "organizations/{organization}/cmekSettings";
    folder_cmek_settings_path(folder), parse_folder_cmek_settings_path =>
        "folders/{folder}/cmekSettings";
    billing_account_cmek_settings_path(billing_account), parse_billing_account_cmek_settings_path =>
        "billingAccounts/{billing_account}/cmekSettings";

    settings_path(project), parse_settings_path => "projects/{project}/settings";
    organization_settings_path(organization), parse_organization_settings_path =>
        "organizations/{organization}/settings";
    folder_settings_path(folder), parse_folder_settings_path => "folders/{folder}/settings";
    billing_account_settings_path(billing_account), parse_billing_account_settings_path =>
        "billingAccounts/{billing_account}/settings";

    common_billing_account_path(billing_account), parse_common_billing_account_path =>
        "billingAccounts/{billing_account}";
    common_folder_path(folder), parse_common_folder_path => "folders/{folder}";
    common_organization_path(organization), parse_common_organization_path =>
        "organizations/{organization}";
    common_project_path(project), parse_common_project_path => "projects/{project}";
    common_location_path(project, location), parse_common_location_path =>
        "projects/{project}/locations/{location}";
}

#[cfg(test)]
mod tests {
    use super::*;

    fn components(pairs: &[(&'static str, &str)]) -> HashMap<&'static str, String> {
        pairs.iter().map(|(k, v)| (*k, v.to_string())).collect()
    }

    /// Builds a name from the given components, parses it back, and checks
    /// that one segment more or less no longer matches.
    macro_rules! round_trip {
        ($($build:ident / $parse:ident { $($key:ident: $value:literal),+ })*) => {$(
            let name = $build($($value),+);
            assert_eq!(
                $parse(&name),
                Some(components(&[$((stringify!($key), $value)),+])),
                "{name}"
            );
            assert_eq!($parse(&format!("{name}/extra")), None, "{name}/extra");
            let (shorter, _) = name.rsplit_once('/').unwrap();
            assert_eq!($parse(shorter), None, "{shorter}");
        )*};
    }

    #[test]
    fn every_template_round_trips() {
        round_trip! {
            log_path / parse_log_path { project: "squid", log: "clam" }
            organization_log_path / parse_organization_log_path { organization: "whelk", log: "octopus" }
            folder_log_path / parse_folder_log_path { folder: "oyster", log: "nudibranch" }
            billing_account_log_path / parse_billing_account_log_path { billing_account: "cuttlefish", log: "mussel" }

            log_sink_path / parse_log_sink_path { project: "winkle", sink: "nautilus" }
            organization_log_sink_path / parse_organization_log_sink_path { organization: "scallop", sink: "abalone" }
            folder_log_sink_path / parse_folder_log_sink_path { folder: "squid", sink: "clam" }
            billing_account_log_sink_path / parse_billing_account_log_sink_path { billing_account: "whelk", sink: "octopus" }

            log_exclusion_path / parse_log_exclusion_path { project: "oyster", exclusion: "nudibranch" }
            organization_log_exclusion_path / parse_organization_log_exclusion_path { organization: "cuttlefish", exclusion: "mussel" }
            folder_log_exclusion_path / parse_folder_log_exclusion_path { folder: "winkle", exclusion: "nautilus" }
            billing_account_log_exclusion_path / parse_billing_account_log_exclusion_path { billing_account: "scallop", exclusion: "abalone" }

            log_bucket_path / parse_log_bucket_path { project: "squid", location: "clam", bucket: "whelk" }
            organization_log_bucket_path / parse_organization_log_bucket_path { organization: "octopus", location: "oyster", bucket: "nudibranch" }
            folder_log_bucket_path / parse_folder_log_bucket_path { folder: "cuttlefish", location: "mussel", bucket: "winkle" }
            billing_account_log_bucket_path / parse_billing_account_log_bucket_path { billing_account: "nautilus", location: "scallop", bucket: "abalone" }

            log_view_path / parse_log_view_path { project: "squid", location: "clam", bucket: "whelk", view: "octopus" }
            organization_log_view_path / parse_organization_log_view_path { organization: "oyster", location: "nudibranch", bucket: "cuttlefish", view: "mussel" }
            folder_log_view_path / parse_folder_log_view_path { folder: "winkle", location: "nautilus", bucket: "scallop", view: "abalone" }
            billing_account_log_view_path / parse_billing_account_log_view_path { billing_account: "squid", location: "clam", bucket: "whelk", view: "octopus" }

            log_metric_path / parse_log_metric_path { project: "oyster", metric: "nudibranch" }

            cmek_settings_path / parse_cmek_settings_path { project: "cuttlefish" }
            organization_cmek_settings_path / parse_organization_cmek_settings_path { organization: "mussel" }
            folder_cmek_settings_path / parse_folder_cmek_settings_path { folder: "winkle" }
            billing_account_cmek_settings_path / parse_billing_account_cmek_settings_path { billing_account: "nautilus" }

            settings_path / parse_settings_path { project: "scallop" }
            organization_settings_path / parse_organization_settings_path { organization: "abalone" }
            folder_settings_path / parse_folder_settings_path { folder: "squid" }
            billing_account_settings_path / parse_billing_account_settings_path { billing_account: "clam" }

            common_billing_account_path / parse_common_billing_account_path { billing_account: "whelk" }
            common_folder_path / parse_common_folder_path { folder: "octopus" }
            common_organization_path / parse_common_organization_path { organization: "oyster" }
            common_project_path / parse_common_project_path { project: "nudibranch" }
            common_location_path / parse_common_location_path { project: "cuttlefish", location: "mussel" }
        }
    }

    #[test]
    fn built_names_have_the_expected_shape() {
        assert_eq!(log_path("p", "l"), "projects/p/logs/l");
        assert_eq!(
            log_bucket_path("p", "global", "_Default"),
            "projects/p/locations/global/buckets/_Default"
        );
        assert_eq!(cmek_settings_path("p"), "projects/p/cmekSettings");
        assert_eq!(
            billing_account_settings_path("b"),
            "billingAccounts/b/settings"
        );
        assert_eq!(common_organization_path("o"), "organizations/o");
    }

    #[test]
    fn mismatched_names_do_not_parse() {
        assert_eq!(parse_log_path("projects/p/sinks/s"), None);
        assert_eq!(parse_log_path("projects/p/logs"), None);
        assert_eq!(parse_log_path("projects/p/logs/a/b"), None);
        assert_eq!(parse_log_path("projects//logs/l"), None);
        assert_eq!(parse_settings_path("folders/f/settings"), None);
    }

    #[test]
    fn template_lists_its_variables() {
        let template = PathTemplate::new("projects/{project}/locations/{location}/buckets/{bucket}");
        assert_eq!(
            template.variables().collect::<Vec<_>>(),
            vec!["project", "location", "bucket"]
        );
    }
}
