use std::fmt;

use crate::Float;

/// BGR channel means subtracted from image patches before they enter the
/// similarity net.
pub const MEAN_IMAGE_BGR: [f32;3] = [103.939, 116.779, 123.68];
pub const MEAN_PATCHES_BGR: [f32;3] = [103.939, 116.779, 123.68];
/// RGBRGB order (VGG mean), applied to colored voxel cube pairs.
pub const MEAN_CVC_RGBRGB: [f32;6] = [123.68, 116.779, 103.939, 123.68, 116.779, 103.939];

pub const D_IMG_PATCH_EMBEDDING: usize = 128;
/// Two patch embeddings plus the view pair angle plus the patch similarity.
pub const D_VIEW_PAIR_FEATURE: usize = D_IMG_PATCH_EMBEDDING*2 + 1 + 1;
pub const SIMILNET_HIDDEN_DIM: usize = 100;
pub const IMG_PATCH_HW_SIZE: usize = 64;
pub const TRIPLET_ALPHA: Float = 100.0;
pub const WEIGHT_DECAY: Float = 0.0001;
/// Updated during parameter tuning.
pub const DEFAULT_LR: Float = 0.0;

const BATCH_SIZE_PATCH_TO_EMBEDDING_PER_GB: u64 = 350;
const BATCH_SIZE_EMBEDDING_PAIR_TO_SIMILARITY_PER_GB: u64 = 100_000;
const BATCH_SIZE_VIEW_PAIR_WEIGHT_PER_GB: u64 = 100_000;

const PRETRAINED_SIMILNET_MODEL: &str = "SurfaceNet_models/epoch33_acc_tr0.707_val0.791.model";
const PRETRAINED_SURFACENET_MODEL: &str = "SurfaceNet_models/2D_2_3D-19-0.918_0.951.model";

/// Side length of a colored voxel cube, (s,s,s) in the paper.
#[derive(Debug,Clone,Copy,PartialEq,Eq)]
pub enum CubeSize {
    D32,
    D64
}

impl CubeSize {

    pub fn voxels_per_side(&self) -> usize {
        match self {
            CubeSize::D32 => 32,
            CubeSize::D64 => 64
        }
    }

    /// Only the center part of the cube is kept because of the boundary
    /// effect of the conv net.
    pub fn center_voxels_per_side(&self) -> usize {
        match self {
            CubeSize::D32 => 26,
            CubeSize::D64 => 52
        }
    }

    fn surfacenet_batch_per_gb(&self) -> Float {
        match self {
            CubeSize::D32 => 1.2,
            CubeSize::D64 => 1.0/6.0
        }
    }
}

impl fmt::Display for CubeSize {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.voxels_per_side())
    }
}

/// Process-wide reconstruction parameters. Constructed once at startup and
/// passed to every consumer, never mutated afterwards.
#[derive(Debug,Clone)]
pub struct PipelineParameters {
    pub gpu_memory_gb: u64,
    pub cube_size: CubeSize,
    /// Voxels with surface probability below this are dropped to save memory.
    pub min_prob: f32,
    /// Fixed threshold for thinning.
    pub tau: f32,
    /// Used in the ray pooling procedure.
    pub gamma: f32,
    pub beta: f32,
    pub n_refine_iterations: usize,
    /// How large an area is covered by the neighboring cubes.
    pub cube_overlapping_ratio: Float,
    /// true: weighted average in the fusion layer; false: plain average.
    pub weighted_fusion: bool,
    pub batch_size_patch_to_embedding: u64,
    pub batch_size_embedding_pair_to_similarity: u64,
    pub batch_size_view_pair_weight: u64,
    pub batch_size_n_view_pair_surfacenet: u64,
    pub pretrained_similnet_model_file: String,
    pub pretrained_surfacenet_model_file: String,
    pub layer_names_to_load: [&'static str;2]
}

impl PipelineParameters {

    pub fn new(gpu_memory_gb: u64, cube_size: CubeSize, input_data_root: &str) -> PipelineParameters {
        PipelineParameters {
            gpu_memory_gb,
            cube_size,
            min_prob: 0.46,
            tau: 0.7,
            gamma: 0.8,
            beta: 6.0,
            n_refine_iterations: 8,
            cube_overlapping_ratio: 0.5,
            weighted_fusion: true,
            batch_size_patch_to_embedding: BATCH_SIZE_PATCH_TO_EMBEDDING_PER_GB*gpu_memory_gb,
            batch_size_embedding_pair_to_similarity: BATCH_SIZE_EMBEDDING_PAIR_TO_SIMILARITY_PER_GB*gpu_memory_gb,
            batch_size_view_pair_weight: BATCH_SIZE_VIEW_PAIR_WEIGHT_PER_GB*gpu_memory_gb,
            batch_size_n_view_pair_surfacenet: (cube_size.surfacenet_batch_per_gb()*gpu_memory_gb as Float).floor() as u64,
            pretrained_similnet_model_file: format!("{}/{}",input_data_root,PRETRAINED_SIMILNET_MODEL),
            pretrained_surfacenet_model_file: format!("{}/{}",input_data_root,PRETRAINED_SURFACENET_MODEL),
            layer_names_to_load: ["output_SurfaceNet_reshape","output_softmaxWeights"]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn batch_sizes_scale_with_gpu_memory() {
        let parameters = PipelineParameters::new(12, CubeSize::D64, "./inputs");
        assert_eq!(parameters.batch_size_patch_to_embedding, 4200);
        assert_eq!(parameters.batch_size_embedding_pair_to_similarity, 1_200_000);
        assert_eq!(parameters.batch_size_view_pair_weight, 1_200_000);
        assert_eq!(parameters.batch_size_n_view_pair_surfacenet, 2);
    }

    #[test]
    fn surfacenet_batch_size_for_small_cube() {
        let parameters = PipelineParameters::new(12, CubeSize::D32, "./inputs");
        assert_eq!(parameters.batch_size_n_view_pair_surfacenet, 14);
        assert_eq!(parameters.cube_size.center_voxels_per_side(), 26);
    }

    #[test]
    fn pretrained_model_files_live_under_input_root() {
        let parameters = PipelineParameters::new(12, CubeSize::D64, "/data/inputs");
        assert!(parameters.pretrained_similnet_model_file.starts_with("/data/inputs/SurfaceNet_models/"));
        assert!(parameters.pretrained_surfacenet_model_file.starts_with("/data/inputs/SurfaceNet_models/"));
    }
}
