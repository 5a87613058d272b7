//! # generate 命令实现
//!
//! 展开作业矩阵并逐个物化：创建作业目录、写 config.json、
//! 链接提交脚本、准备日志目录，可选调用 sbatch 提交。
//!
//! ## 功能
//! - 读取 YAML 场景文件并 fail-fast 校验
//! - 落盘前完成整个矩阵的构建与作业码冲突检测
//! - 严格顺序物化与提交，提交失败即中止（已生成目录保留）
//!
//! ## 依赖关系
//! - 使用 `cli/generate.rs` 定义的参数
//! - 使用 `matrix/`, `utils/slurm.rs`, `utils/output.rs`, `utils/progress.rs`

use crate::cli::generate::{ConfigFields, GenerateArgs, LogLayout};
use crate::error::{GridsweepError, Result};
use crate::matrix::{expander, AxisSet, JobSpec};
use crate::utils::slurm::{self, SbatchRequest};
use crate::utils::{output, progress};

use std::fs;
use std::path::{Path, PathBuf};

/// 执行 generate 命令
pub fn execute(args: GenerateArgs) -> Result<()> {
    output::print_header("Job Matrix Generation");

    if !args.scenarios_file.exists() {
        return Err(GridsweepError::FileNotFound {
            path: args.scenarios_file.display().to_string(),
        });
    }
    if !args.submit_script.exists() {
        return Err(GridsweepError::FileNotFound {
            path: args.submit_script.display().to_string(),
        });
    }

    let axes = AxisSet::from_yaml_file(&args.scenarios_file)?;
    axes.validate()?;

    // 构建与冲突检测都在创建任何目录之前完成
    let specs = expander::expand_all(&axes)?;
    output::print_info(&format!(
        "Expanded {} job(s) from '{}'",
        specs.len(),
        args.scenarios_file.display()
    ));

    fs::create_dir_all(&args.output_root).map_err(|e| GridsweepError::FileWriteError {
        path: args.output_root.display().to_string(),
        source: e,
    })?;

    // 符号链接目标必须是绝对路径，作业目录深度与调用目录无关
    let script_src =
        args.submit_script
            .canonicalize()
            .map_err(|e| GridsweepError::FileReadError {
                path: args.submit_script.display().to_string(),
                source: e,
            })?;

    let shared_logs = match args.log_layout {
        LogLayout::Shared => Some(prepare_shared_logs(&args.output_root)?),
        LogLayout::JobDir => None,
    };

    let pb = progress::create_progress_bar(specs.len() as u64, "Materializing");
    let mut submitted = 0usize;

    for spec in &specs {
        let job_dir = materialize_job(
            spec,
            &args.output_root,
            &script_src,
            args.log_layout,
            args.config_fields,
        )?;

        pb.println(format!("Prepared job '{}' (code '{}')", spec.name, spec.short_code));

        if args.submit {
            let req = sbatch_request(spec, &script_src, args.log_layout, shared_logs.as_deref());
            let reply = slurm::submit(&job_dir, &spec.name, &req)?;
            pb.println(format!("  Submitted as '{}': {}", spec.short_code, reply));
            submitted += 1;
        }

        pb.inc(1);
    }

    pb.finish_and_clear();

    output::print_separator();
    output::print_done(&format!(
        "Set up {} job(s) under '{}', submitted {}",
        specs.len(),
        args.output_root.display(),
        submitted
    ));

    Ok(())
}

/// 物化单个作业：目录、config.json、脚本链接、日志目录
///
/// 对同一规格重复调用是幂等的（陈旧链接会被替换）。
fn materialize_job(
    spec: &JobSpec,
    output_root: &Path,
    script_src: &Path,
    log_layout: LogLayout,
    config_fields: ConfigFields,
) -> Result<PathBuf> {
    let job_dir = output_root.join(&spec.name);
    fs::create_dir_all(&job_dir).map_err(|e| GridsweepError::FileWriteError {
        path: job_dir.display().to_string(),
        source: e,
    })?;

    let config_path = job_dir.join("config.json");
    let config_text = render_config(spec, config_fields)?;
    fs::write(&config_path, config_text).map_err(|e| GridsweepError::FileWriteError {
        path: config_path.display().to_string(),
        source: e,
    })?;

    link_submit_script(script_src, &job_dir)?;

    if log_layout == LogLayout::JobDir {
        let log_dir = job_dir.join("slurm_logs");
        fs::create_dir_all(&log_dir).map_err(|e| GridsweepError::FileWriteError {
            path: log_dir.display().to_string(),
            source: e,
        })?;
    }

    Ok(job_dir)
}

/// 渲染 config.json 文本
fn render_config(spec: &JobSpec, config_fields: ConfigFields) -> Result<String> {
    let text = match config_fields {
        ConfigFields::Standard => serde_json::to_string_pretty(&spec.config)?,
        ConfigFields::Extended => {
            let mut value = serde_json::to_value(&spec.config)?;
            let map = value.as_object_mut().expect("JobConfig serializes to an object");
            map.insert("name".to_string(), serde_json::json!(spec.name));
            map.insert("job_code".to_string(), serde_json::json!(spec.short_code));
            serde_json::to_string_pretty(&value)?
        }
    };
    Ok(text)
}

/// 把提交脚本链接进作业目录，替换已存在的陈旧链接
fn link_submit_script(script_src: &Path, job_dir: &Path) -> Result<PathBuf> {
    let link_name = script_src
        .file_name()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("submit.sb"));
    let dest = job_dir.join(&link_name);

    // symlink_metadata 也能看见指向已删除目标的悬空链接
    if fs::symlink_metadata(&dest).is_ok() {
        fs::remove_file(&dest).map_err(|e| GridsweepError::SymlinkError {
            path: dest.display().to_string(),
            source: e,
        })?;
    }

    place_script(script_src, &dest).map_err(|e| GridsweepError::SymlinkError {
        path: dest.display().to_string(),
        source: e,
    })?;

    Ok(dest)
}

#[cfg(unix)]
fn place_script(src: &Path, dest: &Path) -> std::io::Result<()> {
    std::os::unix::fs::symlink(src, dest)
}

/// 不支持符号链接的平台退化为复制，目录布局保持一致
#[cfg(not(unix))]
fn place_script(src: &Path, dest: &Path) -> std::io::Result<()> {
    fs::copy(src, dest).map(|_| ())
}

/// 建立共享日志目录 <output_root>/slurm_logs 并返回其绝对路径
fn prepare_shared_logs(output_root: &Path) -> Result<PathBuf> {
    let dir = output_root.join("slurm_logs");
    fs::create_dir_all(&dir).map_err(|e| GridsweepError::FileWriteError {
        path: dir.display().to_string(),
        source: e,
    })?;
    dir.canonicalize().map_err(|e| GridsweepError::FileReadError {
        path: dir.display().to_string(),
        source: e,
    })
}

/// 组装一次 sbatch 调用
///
/// job-dir 布局用相对 cwd 的 %x 模板，shared 布局用共享目录下的绝对路径。
fn sbatch_request(
    spec: &JobSpec,
    script_src: &Path,
    log_layout: LogLayout,
    shared_logs: Option<&Path>,
) -> SbatchRequest {
    let script = script_src
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "submit.sb".to_string());

    let (stdout_path, stderr_path) = match log_layout {
        LogLayout::JobDir => (
            Some(PathBuf::from("slurm_logs/%x.out")),
            Some(PathBuf::from("slurm_logs/%x.err")),
        ),
        LogLayout::Shared => {
            let base = shared_logs.expect("shared log dir prepared before submission");
            (
                Some(base.join(format!("{}.out", spec.name))),
                Some(base.join(format!("{}.err", spec.name))),
            )
        }
    };

    SbatchRequest {
        job_name: spec.short_code.clone(),
        script,
        stdout_path,
        stderr_path,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::AxisSet;
    use std::collections::HashMap;
    use tempfile::tempdir;

    fn sample_spec() -> JobSpec {
        let mut island_params = HashMap::new();
        island_params.insert("Oahu".to_string(), 120.5);

        let mut year_map = HashMap::new();
        year_map.insert("Oahu".to_string(), 40.0);
        let mut co2_limits = HashMap::new();
        co2_limits.insert("2035".to_string(), year_map);

        let axes = AxisSet {
            islands: vec!["Oahu".to_string()],
            years: vec!["2035".to_string()],
            scenarios: vec!["policyA".to_string()],
            cleans: vec!["clean".to_string()],
            island_params,
            co2_limits,
        };

        JobSpec::build("Oahu", "2035", "policyA", "clean", &axes).unwrap()
    }

    fn write_script(dir: &Path) -> PathBuf {
        let script = dir.join("submit_test.sb");
        fs::write(&script, "#!/bin/bash\nsrun solver config.json\n").unwrap();
        script.canonicalize().unwrap()
    }

    #[test]
    fn test_materialize_creates_job_layout() {
        let root = tempdir().unwrap();
        let script = write_script(root.path());
        let out = root.path().join("jobs");
        let spec = sample_spec();

        let job_dir = materialize_job(
            &spec,
            &out,
            &script,
            LogLayout::JobDir,
            ConfigFields::Standard,
        )
        .unwrap();

        assert_eq!(job_dir, out.join("policyA_Oahu_2035_clean"));
        assert!(job_dir.join("config.json").exists());
        assert!(job_dir.join("submit_test.sb").exists());
        assert!(job_dir.join("slurm_logs").is_dir());

        let text = fs::read_to_string(job_dir.join("config.json")).unwrap();
        let json: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(json["CO235reduction"], serde_json::json!(true));
        assert_eq!(json["BAUCO2emissions"], serde_json::json!(120.5));
        assert_eq!(json["CO2_limit"], serde_json::json!(40.0));
        assert!(json.get("name").is_none());
    }

    #[test]
    fn test_materialize_extended_config_fields() {
        let root = tempdir().unwrap();
        let script = write_script(root.path());
        let out = root.path().join("jobs");
        let spec = sample_spec();

        let job_dir = materialize_job(
            &spec,
            &out,
            &script,
            LogLayout::JobDir,
            ConfigFields::Extended,
        )
        .unwrap();

        let text = fs::read_to_string(job_dir.join("config.json")).unwrap();
        let json: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(json["name"], serde_json::json!("policyA_Oahu_2035_clean"));
        assert_eq!(json["job_code"], serde_json::json!("POLOA35C"));
    }

    #[test]
    fn test_materialize_is_idempotent() {
        let root = tempdir().unwrap();
        let script = write_script(root.path());
        let out = root.path().join("jobs");
        let spec = sample_spec();

        for _ in 0..2 {
            materialize_job(
                &spec,
                &out,
                &script,
                LogLayout::JobDir,
                ConfigFields::Standard,
            )
            .unwrap();
        }

        assert!(out.join("policyA_Oahu_2035_clean/submit_test.sb").exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_script_is_linked_not_copied() {
        let root = tempdir().unwrap();
        let script = write_script(root.path());
        let out = root.path().join("jobs");
        let spec = sample_spec();

        let job_dir = materialize_job(
            &spec,
            &out,
            &script,
            LogLayout::JobDir,
            ConfigFields::Standard,
        )
        .unwrap();

        let dest = job_dir.join("submit_test.sb");
        assert!(fs::symlink_metadata(&dest).unwrap().file_type().is_symlink());
        assert_eq!(fs::read_link(&dest).unwrap(), script);
    }

    #[test]
    fn test_shared_log_layout_paths() {
        let root = tempdir().unwrap();
        let script = write_script(root.path());
        let out = root.path().join("jobs");
        fs::create_dir_all(&out).unwrap();
        let spec = sample_spec();

        let shared = prepare_shared_logs(&out).unwrap();
        assert!(shared.is_dir());

        let req = sbatch_request(&spec, &script, LogLayout::Shared, Some(&shared));
        assert_eq!(req.job_name, "POLOA35C");
        assert_eq!(
            req.stdout_path.unwrap(),
            shared.join("policyA_Oahu_2035_clean.out")
        );
        assert_eq!(
            req.stderr_path.unwrap(),
            shared.join("policyA_Oahu_2035_clean.err")
        );
    }

    #[test]
    fn test_job_dir_log_layout_uses_x_template() {
        let root = tempdir().unwrap();
        let script = write_script(root.path());
        let spec = sample_spec();

        let req = sbatch_request(&spec, &script, LogLayout::JobDir, None);
        assert_eq!(req.script, "submit_test.sb");
        assert_eq!(req.stdout_path.unwrap(), PathBuf::from("slurm_logs/%x.out"));
        assert_eq!(req.stderr_path.unwrap(), PathBuf::from("slurm_logs/%x.err"));
    }
}
