use nengine_data::internal::*;
use ne_ndarray::{ArrayD, IxDyn};

use crate::tfpb::tensorflow::tensor_shape_proto::Dim;
use crate::tfpb::tensorflow::{DataType, NodeDef, TensorProto, TensorShapeProto};

impl TryFrom<DataType> for DatumType {
    type Error = NeError;
    fn try_from(t: DataType) -> NeResult<DatumType> {
        match t {
            DataType::DtBool => Ok(DatumType::Bool),
            DataType::DtUint8 => Ok(DatumType::U8),
            DataType::DtInt8 => Ok(DatumType::I8),
            DataType::DtInt32 => Ok(DatumType::I32),
            DataType::DtInt64 => Ok(DatumType::I64),
            DataType::DtFloat => Ok(DatumType::F32),
            DataType::DtDouble => Ok(DatumType::F64),
            _ => bail!("Unknown DatumType {:?}", t),
        }
    }
}

impl TryFrom<DatumType> for DataType {
    type Error = NeError;
    fn try_from(dt: DatumType) -> NeResult<DataType> {
        Ok(match dt {
            DatumType::Bool => DataType::DtBool,
            DatumType::U8 => DataType::DtUint8,
            DatumType::I8 => DataType::DtInt8,
            DatumType::I32 => DataType::DtInt32,
            DatumType::I64 => DataType::DtInt64,
            DatumType::F32 => DataType::DtFloat,
            DatumType::F64 => DataType::DtDouble,
        })
    }
}

impl<'a> TryFrom<&'a TensorShapeProto> for TVec<usize> {
    type Error = NeError;
    fn try_from(t: &'a TensorShapeProto) -> NeResult<TVec<usize>> {
        if t.dim.iter().any(|d| d.size < 0) {
            bail!("Negative dim found")
        }
        Ok(t.dim.iter().map(|d| d.size as usize).collect::<TVec<_>>())
    }
}

fn tensor_from_repeated_field<T: Datum>(shape: &[usize], data: Vec<T>) -> NeResult<TensorData>
where
    TensorData: From<ArrayD<T>>,
{
    // a single value is broadcast to the whole shape
    let t = if data.len() == 1 {
        ArrayD::from_elem(IxDyn(shape), data[0].clone())
    } else {
        ArrayD::from_shape_vec(IxDyn(shape), data)?
    };
    Ok(t.into())
}

fn tensor_from_raw<T: Datum, const N: usize>(
    shape: &[usize],
    content: &[u8],
    decode: fn([u8; N]) -> T,
) -> NeResult<TensorData>
where
    TensorData: From<ArrayD<T>>,
{
    if content.len() % N != 0 {
        bail!("Raw tensor content of {} bytes is not made of {}-byte items", content.len(), N)
    }
    let values = content
        .chunks_exact(N)
        .map(|chunk| {
            let mut bytes = [0u8; N];
            bytes.copy_from_slice(chunk);
            decode(bytes)
        })
        .collect();
    Ok(ArrayD::from_shape_vec(IxDyn(shape), values)?.into())
}

impl TryFrom<&TensorProto> for TensorData {
    type Error = NeError;
    fn try_from(t: &TensorProto) -> NeResult<TensorData> {
        let dims: TVec<usize> = match &t.tensor_shape {
            Some(shape) => shape.try_into()?,
            None => tvec!(),
        };
        let dtype = DataType::from_i32(t.dtype)
            .ok_or_else(|| format_err!("Invalid DataType {}", t.dtype))?;
        let content = &t.tensor_content;
        let data = if !content.is_empty() {
            match dtype {
                DataType::DtUint8 => tensor_from_raw::<u8, 1>(&dims, content, u8::from_le_bytes)?,
                DataType::DtInt8 => tensor_from_raw::<i8, 1>(&dims, content, i8::from_le_bytes)?,
                DataType::DtInt32 => {
                    tensor_from_raw::<i32, 4>(&dims, content, i32::from_le_bytes)?
                }
                DataType::DtInt64 => {
                    tensor_from_raw::<i64, 8>(&dims, content, i64::from_le_bytes)?
                }
                DataType::DtFloat => {
                    tensor_from_raw::<f32, 4>(&dims, content, f32::from_le_bytes)?
                }
                DataType::DtDouble => {
                    tensor_from_raw::<f64, 8>(&dims, content, f64::from_le_bytes)?
                }
                _ => bail!("Missing type (for tensor_content) {:?}", dtype),
            }
        } else {
            match dtype {
                DataType::DtBool => tensor_from_repeated_field(&dims, t.bool_val.to_vec())?,
                DataType::DtUint8 => tensor_from_repeated_field(
                    &dims,
                    t.int_val.iter().map(|&i| i as u8).collect::<Vec<u8>>(),
                )?,
                DataType::DtInt8 => tensor_from_repeated_field(
                    &dims,
                    t.int_val.iter().map(|&i| i as i8).collect::<Vec<i8>>(),
                )?,
                DataType::DtInt32 => tensor_from_repeated_field(&dims, t.int_val.to_vec())?,
                DataType::DtInt64 => tensor_from_repeated_field(&dims, t.int64_val.to_vec())?,
                DataType::DtFloat => tensor_from_repeated_field(&dims, t.float_val.to_vec())?,
                DataType::DtDouble => tensor_from_repeated_field(&dims, t.double_val.to_vec())?,
                _ => bail!("Missing type (for _val()) {:?}", dtype),
            }
        };
        Ok(data)
    }
}

fn empty_tensor_proto() -> TensorProto {
    TensorProto {
        dtype: 0,
        tensor_shape: None,
        version_number: 0,
        tensor_content: vec![],
        float_val: vec![],
        double_val: vec![],
        int_val: vec![],
        string_val: vec![],
        int64_val: vec![],
        bool_val: vec![],
    }
}

impl TryFrom<&TensorData> for TensorProto {
    type Error = NeError;
    fn try_from(from: &TensorData) -> NeResult<TensorProto> {
        let mut tensor = empty_tensor_proto();
        let shape = TensorShapeProto {
            dim: from.shape().iter().map(|d| Dim { size: *d as _, name: String::new() }).collect(),
            unknown_rank: false,
        };
        tensor.tensor_shape = Some(shape);
        let dt = DataType::try_from(from.datum_type())?;
        tensor.dtype = dt.into();
        match from {
            TensorData::Bool(a) => tensor.bool_val = a.iter().cloned().collect(),
            TensorData::U8(a) => tensor.int_val = a.iter().map(|&x| x as i32).collect(),
            TensorData::I8(a) => tensor.int_val = a.iter().map(|&x| x as i32).collect(),
            TensorData::I32(a) => tensor.int_val = a.iter().cloned().collect(),
            TensorData::I64(a) => tensor.int64_val = a.iter().cloned().collect(),
            TensorData::F32(a) => tensor.float_val = a.iter().cloned().collect(),
            TensorData::F64(a) => tensor.double_val = a.iter().cloned().collect(),
        }
        Ok(tensor)
    }
}

/// Fold a `Const` node into the tensor it produces.
///
/// The tensor is named after the node's first output (`name:0`) and carries
/// the decoded `value` attribute as its data.
pub fn tensor_for_const(node: &NodeDef) -> NeResult<Tensor> {
    if node.op != "Const" {
        bail!("Node {} is a {}, not a Const", node.name, node.op);
    }
    let dtype = node.get_attr_datum_type("dtype")?;
    let data = node.get_attr_tensor("value")?;
    if data.datum_type() != dtype {
        bail!("Const node {} doesn't have the expected {:?} type.", node.name, dtype);
    }
    trace!("Const {}: {:?}", node.name, data);
    Ok(Tensor::new(format!("{}:0", node.name)).with_source_op(&node.name).with_data(data))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tfpb;

    fn konst(name: &str, data: TensorData) -> NodeDef {
        let dt = DataType::try_from(data.datum_type()).unwrap();
        tfpb::node()
            .name(name)
            .op("Const")
            .attr("dtype", dt)
            .attr("value", TensorProto::try_from(&data).unwrap())
    }

    #[test]
    fn const_int32_axis() {
        let t = tensor_for_const(&konst("axis", TensorData::from(vec![1i32]))).unwrap();
        assert_eq!(t.name, "axis:0");
        assert_eq!(&*t.source_op, &["axis".to_string()]);
        assert_eq!(t.data.as_ref().and_then(|d| d.first_as_i64()), Some(1));
        assert_eq!(t.dtype, Some(DatumType::I32));
    }

    #[test]
    fn scalar_is_broadcast() {
        let mut proto = empty_tensor_proto();
        proto.dtype = DataType::DtInt64.into();
        proto.tensor_shape =
            Some(TensorShapeProto { dim: vec![Dim { size: 3, name: String::new() }], unknown_rank: false });
        proto.int64_val = vec![7];
        let data = TensorData::try_from(&proto).unwrap();
        assert_eq!(data, TensorData::from(vec![7i64, 7, 7]));
    }

    #[test]
    fn raw_content() {
        let mut proto = empty_tensor_proto();
        proto.dtype = DataType::DtInt32.into();
        proto.tensor_shape =
            Some(TensorShapeProto { dim: vec![Dim { size: 2, name: String::new() }], unknown_rank: false });
        proto.tensor_content = [-1i32, 3].iter().flat_map(|x| x.to_le_bytes()).collect();
        let data = TensorData::try_from(&proto).unwrap();
        assert_eq!(data, TensorData::from(vec![-1i32, 3]));
    }

    #[test]
    fn raw_content_size_mismatch() {
        let mut proto = empty_tensor_proto();
        proto.dtype = DataType::DtInt64.into();
        proto.tensor_content = vec![0u8; 5];
        assert!(TensorData::try_from(&proto).is_err());
    }

    #[test]
    fn const_type_mismatch() {
        let node = konst("axis", TensorData::from(vec![1i32])).attr("dtype", DataType::DtInt64);
        assert!(tensor_for_const(&node).is_err());
    }

    #[test]
    fn not_a_const() {
        let node = tfpb::node().name("x").op("Placeholder").attr("dtype", DataType::DtFloat);
        assert!(tensor_for_const(&node).is_err());
    }
}
