use std::{
	fs::{self, File},
	io,
	path::{Path, PathBuf},
};


/// Run the test on every file under the given directory, relative to the crate root.
/// Files are visited in path order, so failures are reproducible.
pub fn test_dir<P, F>(path: P, mut test: F) -> io::Result<()>
where
	P: AsRef<Path>,
	F: FnMut(&Path, File) -> io::Result<()>,
{
	let mut pending = vec![PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(path)];

	while let Some(dir) = pending.pop() {
		let mut entries = fs::read_dir(&dir)?
			.map(|entry| entry.map(|entry| entry.path()))
			.collect::<io::Result<Vec<_>>>()?;

		entries.sort();

		for path in entries {
			if path.is_dir() {
				pending.push(path);
			} else {
				test(&path, File::open(&path)?)?;
			}
		}
	}

	Ok(())
}
