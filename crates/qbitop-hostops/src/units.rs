//! Systemd unit definitions installed by the operator.

/// Placeholder substituted with the sshfs source path at render time.
const SOURCE_PLACEHOLDER: &str = "{source}";

/// Unit running the qBittorrent daemon as the service user.
pub const QBITTORRENT_UNIT: &str = "\
[Unit]
Description=QBittorrent service
After=network.target
StartLimitIntervalSec=0

[Service]
Type=simple
Restart=always
RestartSec=1
User=qbittorrent
ExecStart=/usr/bin/qbittorrent-nox --profile=/home/qbittorrent

[Install]
WantedBy=multi-user.target
";

/// Template for the sshfs mount unit; `{source}` is the remote path.
const SSHFS_UNIT_TEMPLATE: &str = "\
[Unit]
Description=SSHFS service
After=network.target
StartLimitIntervalSec=0

[Service]
Type=simple
Restart=always
RestartSec=1
User=qbittorrent
ExecStart=/usr/bin/sshfs {source} /srv -f -o max_conns=32

[Install]
WantedBy=multi-user.target
";

/// Render the sshfs unit for the given remote source path.
#[must_use]
pub fn render_sshfs_unit(source: &str) -> String {
    SSHFS_UNIT_TEMPLATE.replace(SOURCE_PLACEHOLDER, source)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sshfs_unit_embeds_the_source_path() {
        let unit = render_sshfs_unit("torrents@seedbox:/data");
        assert!(unit.contains(
            "ExecStart=/usr/bin/sshfs torrents@seedbox:/data /srv -f -o max_conns=32"
        ));
        assert!(!unit.contains(SOURCE_PLACEHOLDER));
    }

    #[test]
    fn units_run_as_the_service_user() {
        assert!(QBITTORRENT_UNIT.contains("User=qbittorrent"));
        assert!(render_sshfs_unit("src").contains("User=qbittorrent"));
    }
}
