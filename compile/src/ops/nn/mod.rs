use crate::ops::OpRegister;

pub mod softmax;

pub fn register_all_ops(reg: &mut OpRegister) {
    reg.insert("Softmax", softmax::softmax);
    reg.insert("SoftmaxGraph", softmax::softmax);
}
