//! Host filesystem locations touched by the operator.

use std::path::PathBuf;

/// Name of the system user the daemon and mount run as.
pub const SERVICE_USER: &str = "qbittorrent";

/// Set of host paths the operator provisions.
///
/// Defaults match a production host; tests redirect every entry into a
/// scratch directory.
#[derive(Debug, Clone)]
pub struct HostPaths {
    /// Home directory of the service user.
    pub home_dir: PathBuf,
    /// The daemon's configuration file.
    pub config_path: PathBuf,
    /// Installed qbittorrent systemd unit.
    pub bt_unit_path: PathBuf,
    /// Installed sshfs systemd unit.
    pub sshfs_unit_path: PathBuf,
    /// Private key used by the sshfs mount.
    pub ssh_key_path: PathBuf,
    /// Mount point the remote filesystem is attached to.
    pub mount_dir: PathBuf,
}

impl Default for HostPaths {
    fn default() -> Self {
        Self {
            home_dir: PathBuf::from("/home/qbittorrent"),
            config_path: PathBuf::from("/home/qbittorrent/qBittorrent/config/qBittorrent.conf"),
            bt_unit_path: PathBuf::from("/etc/systemd/system/qbittorrent.service"),
            sshfs_unit_path: PathBuf::from("/etc/systemd/system/sshfs.service"),
            ssh_key_path: PathBuf::from("/home/qbittorrent/.ssh/id_rsa"),
            mount_dir: PathBuf::from("/srv"),
        }
    }
}

impl HostPaths {
    /// Relocate every path under `root`, for tests that exercise the real
    /// filesystem without touching the host.
    #[must_use]
    pub fn rooted_at(root: &std::path::Path) -> Self {
        Self {
            home_dir: root.join("home/qbittorrent"),
            config_path: root.join("home/qbittorrent/qBittorrent/config/qBittorrent.conf"),
            bt_unit_path: root.join("etc/systemd/system/qbittorrent.service"),
            sshfs_unit_path: root.join("etc/systemd/system/sshfs.service"),
            ssh_key_path: root.join("home/qbittorrent/.ssh/id_rsa"),
            mount_dir: root.join("srv"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_the_service_user_home() {
        let paths = HostPaths::default();
        assert!(paths.config_path.starts_with(&paths.home_dir));
        assert!(paths.ssh_key_path.starts_with(&paths.home_dir));
        assert_eq!(paths.mount_dir, PathBuf::from("/srv"));
    }

    #[test]
    fn rooted_paths_stay_under_the_root() {
        let root = PathBuf::from("/tmp/scratch");
        let paths = HostPaths::rooted_at(&root);
        assert!(paths.home_dir.starts_with(&root));
        assert!(paths.bt_unit_path.starts_with(&root));
        assert!(paths.sshfs_unit_path.starts_with(&root));
        assert!(paths.mount_dir.starts_with(&root));
    }
}
