//! One period of a sine wave sampled at 512 points.

pub const LUT_SINE_512_BITS: usize = 9;
pub const LUT_SINE_512_SIZE: usize = 1 << LUT_SINE_512_BITS;

#[allow(clippy::excessive_precision)]
pub static LUT_SINE_512: [f32; LUT_SINE_512_SIZE] = [
    0.0, 0.0122715383, 0.0245412285, 0.0368072229, 0.0490676743, 0.0613207363, 0.0735645636, 0.0857973123,
    0.0980171403, 0.110222207, 0.122410675, 0.134580709, 0.146730474, 0.158858143, 0.170961889, 0.183039888,
    0.195090322, 0.207111376, 0.21910124, 0.231058108, 0.24298018, 0.25486566, 0.266712757, 0.278519689,
    0.290284677, 0.302005949, 0.31368174, 0.325310292, 0.336889853, 0.34841868, 0.359895037, 0.371317194,
    0.382683432, 0.39399204, 0.405241314, 0.41642956, 0.427555093, 0.438616239, 0.44961133, 0.460538711,
    0.471396737, 0.482183772, 0.492898192, 0.503538384, 0.514102744, 0.524589683, 0.53499762, 0.545324988,
    0.555570233, 0.565731811, 0.575808191, 0.585797857, 0.595699304, 0.605511041, 0.615231591, 0.624859488,
    0.634393284, 0.643831543, 0.653172843, 0.662415778, 0.671558955, 0.680600998, 0.689540545, 0.698376249,
    0.707106781, 0.715730825, 0.724247083, 0.732654272, 0.740951125, 0.749136395, 0.757208847, 0.765167266,
    0.773010453, 0.780737229, 0.788346428, 0.795836905, 0.803207531, 0.810457198, 0.817584813, 0.824589303,
    0.831469612, 0.838224706, 0.844853565, 0.851355193, 0.85772861, 0.863972856, 0.870086991, 0.876070094,
    0.881921264, 0.88763962, 0.893224301, 0.898674466, 0.903989293, 0.909167983, 0.914209756, 0.919113852,
    0.923879533, 0.92850608, 0.932992799, 0.937339012, 0.941544065, 0.945607325, 0.949528181, 0.95330604,
    0.956940336, 0.960430519, 0.963776066, 0.966976471, 0.970031253, 0.972939952, 0.97570213, 0.978317371,
    0.98078528, 0.983105487, 0.985277642, 0.987301418, 0.98917651, 0.990902635, 0.992479535, 0.99390697,
    0.995184727, 0.996312612, 0.997290457, 0.998118113, 0.998795456, 0.999322385, 0.999698819, 0.999924702,
    1.0, 0.999924702, 0.999698819, 0.999322385, 0.998795456, 0.998118113, 0.997290457, 0.996312612,
    0.995184727, 0.99390697, 0.992479535, 0.990902635, 0.98917651, 0.987301418, 0.985277642, 0.983105487,
    0.98078528, 0.978317371, 0.97570213, 0.972939952, 0.970031253, 0.966976471, 0.963776066, 0.960430519,
    0.956940336, 0.95330604, 0.949528181, 0.945607325, 0.941544065, 0.937339012, 0.932992799, 0.92850608,
    0.923879533, 0.919113852, 0.914209756, 0.909167983, 0.903989293, 0.898674466, 0.893224301, 0.88763962,
    0.881921264, 0.876070094, 0.870086991, 0.863972856, 0.85772861, 0.851355193, 0.844853565, 0.838224706,
    0.831469612, 0.824589303, 0.817584813, 0.810457198, 0.803207531, 0.795836905, 0.788346428, 0.780737229,
    0.773010453, 0.765167266, 0.757208847, 0.749136395, 0.740951125, 0.732654272, 0.724247083, 0.715730825,
    0.707106781, 0.698376249, 0.689540545, 0.680600998, 0.671558955, 0.662415778, 0.653172843, 0.643831543,
    0.634393284, 0.624859488, 0.615231591, 0.605511041, 0.595699304, 0.585797857, 0.575808191, 0.565731811,
    0.555570233, 0.545324988, 0.53499762, 0.524589683, 0.514102744, 0.503538384, 0.492898192, 0.482183772,
    0.471396737, 0.460538711, 0.44961133, 0.438616239, 0.427555093, 0.41642956, 0.405241314, 0.39399204,
    0.382683432, 0.371317194, 0.359895037, 0.34841868, 0.336889853, 0.325310292, 0.31368174, 0.302005949,
    0.290284677, 0.278519689, 0.266712757, 0.25486566, 0.24298018, 0.231058108, 0.21910124, 0.207111376,
    0.195090322, 0.183039888, 0.170961889, 0.158858143, 0.146730474, 0.134580709, 0.122410675, 0.110222207,
    0.0980171403, 0.0857973123, 0.0735645636, 0.0613207363, 0.0490676743, 0.0368072229, 0.0245412285, 0.0122715383,
    0.0, -0.0122715383, -0.0245412285, -0.0368072229, -0.0490676743, -0.0613207363, -0.0735645636, -0.0857973123,
    -0.0980171403, -0.110222207, -0.122410675, -0.134580709, -0.146730474, -0.158858143, -0.170961889, -0.183039888,
    -0.195090322, -0.207111376, -0.21910124, -0.231058108, -0.24298018, -0.25486566, -0.266712757, -0.278519689,
    -0.290284677, -0.302005949, -0.31368174, -0.325310292, -0.336889853, -0.34841868, -0.359895037, -0.371317194,
    -0.382683432, -0.39399204, -0.405241314, -0.41642956, -0.427555093, -0.438616239, -0.44961133, -0.460538711,
    -0.471396737, -0.482183772, -0.492898192, -0.503538384, -0.514102744, -0.524589683, -0.53499762, -0.545324988,
    -0.555570233, -0.565731811, -0.575808191, -0.585797857, -0.595699304, -0.605511041, -0.615231591, -0.624859488,
    -0.634393284, -0.643831543, -0.653172843, -0.662415778, -0.671558955, -0.680600998, -0.689540545, -0.698376249,
    -0.707106781, -0.715730825, -0.724247083, -0.732654272, -0.740951125, -0.749136395, -0.757208847, -0.765167266,
    -0.773010453, -0.780737229, -0.788346428, -0.795836905, -0.803207531, -0.810457198, -0.817584813, -0.824589303,
    -0.831469612, -0.838224706, -0.844853565, -0.851355193, -0.85772861, -0.863972856, -0.870086991, -0.876070094,
    -0.881921264, -0.88763962, -0.893224301, -0.898674466, -0.903989293, -0.909167983, -0.914209756, -0.919113852,
    -0.923879533, -0.92850608, -0.932992799, -0.937339012, -0.941544065, -0.945607325, -0.949528181, -0.95330604,
    -0.956940336, -0.960430519, -0.963776066, -0.966976471, -0.970031253, -0.972939952, -0.97570213, -0.978317371,
    -0.98078528, -0.983105487, -0.985277642, -0.987301418, -0.98917651, -0.990902635, -0.992479535, -0.99390697,
    -0.995184727, -0.996312612, -0.997290457, -0.998118113, -0.998795456, -0.999322385, -0.999698819, -0.999924702,
    -1.0, -0.999924702, -0.999698819, -0.999322385, -0.998795456, -0.998118113, -0.997290457, -0.996312612,
    -0.995184727, -0.99390697, -0.992479535, -0.990902635, -0.98917651, -0.987301418, -0.985277642, -0.983105487,
    -0.98078528, -0.978317371, -0.97570213, -0.972939952, -0.970031253, -0.966976471, -0.963776066, -0.960430519,
    -0.956940336, -0.95330604, -0.949528181, -0.945607325, -0.941544065, -0.937339012, -0.932992799, -0.92850608,
    -0.923879533, -0.919113852, -0.914209756, -0.909167983, -0.903989293, -0.898674466, -0.893224301, -0.88763962,
    -0.881921264, -0.876070094, -0.870086991, -0.863972856, -0.85772861, -0.851355193, -0.844853565, -0.838224706,
    -0.831469612, -0.824589303, -0.817584813, -0.810457198, -0.803207531, -0.795836905, -0.788346428, -0.780737229,
    -0.773010453, -0.765167266, -0.757208847, -0.749136395, -0.740951125, -0.732654272, -0.724247083, -0.715730825,
    -0.707106781, -0.698376249, -0.689540545, -0.680600998, -0.671558955, -0.662415778, -0.653172843, -0.643831543,
    -0.634393284, -0.624859488, -0.615231591, -0.605511041, -0.595699304, -0.585797857, -0.575808191, -0.565731811,
    -0.555570233, -0.545324988, -0.53499762, -0.524589683, -0.514102744, -0.503538384, -0.492898192, -0.482183772,
    -0.471396737, -0.460538711, -0.44961133, -0.438616239, -0.427555093, -0.41642956, -0.405241314, -0.39399204,
    -0.382683432, -0.371317194, -0.359895037, -0.34841868, -0.336889853, -0.325310292, -0.31368174, -0.302005949,
    -0.290284677, -0.278519689, -0.266712757, -0.25486566, -0.24298018, -0.231058108, -0.21910124, -0.207111376,
    -0.195090322, -0.183039888, -0.170961889, -0.158858143, -0.146730474, -0.134580709, -0.122410675, -0.110222207,
    -0.0980171403, -0.0857973123, -0.0735645636, -0.0613207363, -0.0490676743, -0.0368072229, -0.0245412285, -0.0122715383,
];
